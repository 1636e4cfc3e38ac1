use std::collections::BTreeSet;

use chrono::NaiveDate;
use leptos::*;

use super::utils::{booking_feedback, marked_days, next_selection, BookingFeedback, MonthCursor};
use crate::api::{ApiClient, ApiError, DirectedClass, EntityId};
use crate::state::reservations::{ReservationReconciler, ReserveOutcome};
use crate::state::session::use_session;
use crate::utils::time::today;

#[derive(Clone)]
pub struct ClassesViewModel {
    pub reconciler: ReservationReconciler,
    pub month: RwSignal<MonthCursor>,
    pub selected_day: RwSignal<Option<NaiveDate>>,
    pub calendar_resource: Resource<(), Result<BTreeSet<NaiveDate>, ApiError>>,
    pub day_resource: Resource<Option<NaiveDate>, Result<Vec<DirectedClass>, ApiError>>,
    pub reservations_resource: Resource<(), ()>,
    pub reserve_action: Action<EntityId, ReserveOutcome>,
    pub feedback: RwSignal<Option<BookingFeedback>>,
}

impl ClassesViewModel {
    pub fn new(api: ApiClient, user_id: EntityId) -> Self {
        let reconciler = ReservationReconciler::new(api.clone(), user_id);
        let month = create_rw_signal(MonthCursor::containing(today()));
        let selected_day = create_rw_signal(None::<NaiveDate>);

        let api_for_calendar = api.clone();
        let calendar_resource = create_resource(
            || (),
            move |_| {
                let api = api_for_calendar.clone();
                async move {
                    api.list_classes(None)
                        .await
                        .map(|classes| marked_days(&classes))
                }
            },
        );

        let api_for_day = api;
        let day_resource = create_resource(
            move || selected_day.get(),
            move |day| {
                let api = api_for_day.clone();
                async move {
                    match day {
                        Some(day) => api.list_classes(Some(day)).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );

        let reconciler_for_load = reconciler.clone();
        let reservations_resource = create_resource(
            || (),
            move |_| {
                let reconciler = reconciler_for_load.clone();
                async move {
                    reconciler.refresh().await;
                }
            },
        );

        let reconciler_for_action = reconciler.clone();
        let reserve_action = create_action(move |class_id: &EntityId| {
            let reconciler = reconciler_for_action.clone();
            let class_id = *class_id;
            async move { reconciler.reserve(class_id).await }
        });

        let feedback = create_rw_signal(None::<BookingFeedback>);
        create_effect(move |_| {
            if let Some(outcome) = reserve_action.value().get() {
                let _ = feedback.try_set(Some(booking_feedback(&outcome)));
            }
        });

        Self {
            reconciler,
            month,
            selected_day,
            calendar_resource,
            day_resource,
            reservations_resource,
            reserve_action,
            feedback,
        }
    }

    pub fn select_day(&self, day: NaiveDate) {
        if let Some(day) = next_selection(self.selected_day.get_untracked(), day) {
            self.feedback.set(None);
            self.selected_day.set(Some(day));
        }
    }

    pub fn reserve(&self, class_id: EntityId) {
        self.feedback.set(None);
        self.reserve_action.dispatch(class_id);
    }

    pub fn show_previous_month(&self) {
        self.month.update(|month| *month = month.previous());
    }

    pub fn show_next_month(&self) {
        self.month.update(|month| *month = month.next());
    }
}

/// `None` when no user is signed in; the route guard normally prevents that.
pub fn use_classes_view_model() -> Option<ClassesViewModel> {
    let session = use_session();
    let user_id = session.current()?.user.id;
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    Some(ClassesViewModel::new(session.authorized(&api), user_id))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{client_user, provide_signed_in, with_runtime};

    #[test]
    fn selecting_same_day_twice_keeps_selection() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_signed_in(client_user());
            let vm = use_classes_view_model().unwrap();
            let day = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
            vm.select_day(day);
            vm.feedback.set(Some(BookingFeedback::Success("ok".into())));
            vm.select_day(day);
            assert_eq!(vm.selected_day.get_untracked(), Some(day));
            assert!(vm.feedback.get_untracked().is_some());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn no_view_model_without_session() {
        with_runtime(|| {
            assert!(use_classes_view_model().is_none());
        });
    }

    #[test]
    fn month_navigation_moves_cursor() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_signed_in(client_user());
            let vm = use_classes_view_model().unwrap();
            let start = vm.month.get_untracked();
            vm.show_next_month();
            assert_eq!(vm.month.get_untracked(), start.next());
            vm.show_previous_month();
            vm.show_previous_month();
            assert_eq!(vm.month.get_untracked(), start.previous());
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
