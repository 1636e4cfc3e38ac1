use leptos::*;

use super::{
    repository,
    utils::{build_report, filter_clients, CoachRole, ReportDraft, REPORT_SENT_MESSAGE},
};
use crate::api::{ApiClient, ApiError, CreateReportRequest, EntityId, Reservation, UserProfile};
use crate::state::session::use_session;
use crate::utils::time::today;

pub const MISSING_REPORT_DATA_MESSAGE: &str = "Faltan datos del cliente o del entrenador.";

#[derive(Clone, Copy)]
pub struct CoachViewModel {
    pub role: CoachRole,
    pub sender_id: Option<EntityId>,
    pub clients_resource: Resource<(), Result<Vec<UserProfile>, ApiError>>,
    pub query: RwSignal<String>,
    pub selected: RwSignal<Option<UserProfile>>,
    pub reservations_resource: Resource<Option<EntityId>, Result<Vec<Reservation>, ApiError>>,
    pub draft: RwSignal<ReportDraft>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub send_action: Action<CreateReportRequest, Result<(), ApiError>>,
}

impl CoachViewModel {
    pub fn new(api: ApiClient, role: CoachRole, sender_id: Option<EntityId>) -> Self {
        let api_for_clients = api.clone();
        let clients_resource = create_resource(
            || (),
            move |_| {
                let api = api_for_clients.clone();
                async move { repository::load_clients(&api).await }
            },
        );

        let selected = create_rw_signal(None::<UserProfile>);
        let api_for_reservations = api.clone();
        let reservations_resource = create_resource(
            move || selected.with(|client| client.as_ref().map(|c| c.id)),
            move |client_id| {
                let api = api_for_reservations.clone();
                async move {
                    match client_id {
                        Some(id) => api.list_reservations(id).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );

        let draft = create_rw_signal(ReportDraft::default());
        let form_error = create_rw_signal(None::<ApiError>);
        let success = create_rw_signal(None::<String>);

        let send_action = create_action(move |request: &CreateReportRequest| {
            let api = api.clone();
            let request = request.clone();
            async move { repository::send_report(&api, request).await }
        });

        create_effect(move |_| {
            if let Some(result) = send_action.value().get() {
                match result {
                    Ok(()) => {
                        let _ = success.try_set(Some(REPORT_SENT_MESSAGE.to_string()));
                        let _ = draft.try_set(ReportDraft::default());
                    }
                    Err(err) => {
                        let _ = form_error.try_set(Some(err));
                    }
                }
            }
        });

        Self {
            role,
            sender_id,
            clients_resource,
            query: create_rw_signal(String::new()),
            selected,
            reservations_resource,
            draft,
            form_error,
            success,
            send_action,
        }
    }

    /// Clients matching the current search; empty until the list loads.
    pub fn visible_clients(&self) -> Vec<UserProfile> {
        let query = self.query.get();
        self.clients_resource
            .get()
            .and_then(Result::ok)
            .map(|clients| filter_clients(&clients, &query))
            .unwrap_or_default()
    }

    pub fn select_client(&self, client: UserProfile) {
        log::debug!("{:?} opened client {}", self.role, client.id);
        self.reset_form();
        self.selected.set(Some(client));
    }

    pub fn back_to_list(&self) {
        self.reset_form();
        self.selected.set(None);
    }

    pub fn update_draft(&self, apply: impl FnOnce(&mut ReportDraft)) {
        self.draft.update(apply);
        self.success.set(None);
    }

    /// Builds the report from the draft; nothing is sent when validation fails.
    pub fn submit_report(&self) -> bool {
        if self.send_action.pending().get_untracked() {
            return false;
        }
        self.success.set(None);
        let client_id = self.selected.with_untracked(|c| c.as_ref().map(|c| c.id));
        let (Some(client_id), Some(sender_id)) = (client_id, self.sender_id) else {
            self.form_error
                .set(Some(ApiError::validation(MISSING_REPORT_DATA_MESSAGE)));
            return false;
        };
        let draft = self.draft.get_untracked();
        match build_report(self.role, &draft, client_id, sender_id, today()) {
            Ok(request) => {
                self.form_error.set(None);
                self.send_action.dispatch(request);
                true
            }
            Err(err) => {
                self.form_error.set(Some(err));
                false
            }
        }
    }

    fn reset_form(&self) {
        self.draft.set(ReportDraft::default());
        self.form_error.set(None);
        self.success.set(None);
    }
}

pub fn use_coach_view_model(role: CoachRole) -> CoachViewModel {
    let session = use_session();
    let sender_id = session.current().map(|s| s.user.id);
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    CoachViewModel::new(session.authorized(&api), role, sender_id)
}
