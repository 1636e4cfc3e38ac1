use leptos::*;

use super::{
    components::{
        client_detail::ClientDetail,
        client_list::{ClientList, ClientSearch},
        report_form::ReportForm,
    },
    utils::{CoachRole, ReportDraft, CLIENTS_LOAD_ERROR},
    view_model::use_coach_view_model,
};
use crate::{
    api::UserProfile,
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
};

#[component]
pub fn CoachPanel(role: CoachRole) -> impl IntoView {
    let vm = use_coach_view_model(role);
    let clients = Signal::derive(move || vm.visible_clients());
    let load_failed = Signal::derive(move || matches!(vm.clients_resource.get(), Some(Err(_))));
    let pending = vm.send_action.pending();
    let on_select = Callback::new(move |client: UserProfile| vm.select_client(client));
    let on_change = Callback::new(move |next: ReportDraft| vm.update_draft(|draft| *draft = next));
    let on_submit = Callback::new(move |_: ()| {
        vm.submit_report();
    });

    view! {
        <Layout>
            <div class="space-y-4 px-4">
                <h2 class="text-2xl font-bold text-fg">{role.dashboard().title()}</h2>
                {move || match vm.selected.get() {
                    Some(client) => view! {
                        <div class="space-y-4">
                            <button
                                class="text-sm text-fg-muted hover:text-fg"
                                on:click=move |_| vm.back_to_list()
                            >
                                "← Volver a la lista"
                            </button>
                            <div class="grid gap-6 lg:grid-cols-2">
                                <ClientDetail client=client reservations=vm.reservations_resource/>
                                <ReportForm
                                    role=role
                                    draft=vm.draft
                                    error=vm.form_error
                                    success=vm.success
                                    pending=pending
                                    on_change=on_change
                                    on_submit=on_submit
                                />
                            </div>
                        </div>
                    }
                    .into_view(),
                    None => view! {
                        <div class="space-y-3 max-w-2xl">
                            <ClientSearch query=vm.query/>
                            <Show when=move || load_failed.get() fallback=|| ()>
                                <ErrorMessage message=CLIENTS_LOAD_ERROR/>
                            </Show>
                            <Transition fallback=|| view! { <LoadingSpinner/> }>
                                {move || vm.clients_resource.get().map(|_| view! {
                                    <ClientList clients=clients on_select=on_select/>
                                })}
                            </Transition>
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{nutritionist_user, provide_signed_in, trainer_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn trainer_panel_renders_search() {
        let html = render_to_string(move || {
            provide_signed_in(trainer_user());
            view! { <CoachPanel role=CoachRole::Trainer/> }
        });
        assert!(html.contains("Panel del entrenador"));
        assert!(html.contains("Buscar cliente"));
    }

    #[test]
    fn nutritionist_panel_uses_its_title() {
        let html = render_to_string(move || {
            provide_signed_in(nutritionist_user());
            view! { <CoachPanel role=CoachRole::Nutritionist/> }
        });
        assert!(html.contains("Panel del nutricionista"));
    }
}
