use leptos::*;

use crate::{
    api::{DirectedClass, EntityId},
    pages::classes::utils::duration_label,
    state::reservations::ReservationState,
    utils::time::format_class_time,
};

#[component]
pub fn ClassCard(
    class: DirectedClass,
    reservations: Signal<ReservationState>,
    on_reserve: Callback<EntityId>,
) -> impl IntoView {
    let class_id = class.id;
    let reserved = move || reservations.with(|state| state.loaded.set.contains(class_id));
    let booking = move || reservations.with(|state| state.is_booking(class_id));
    let blocked = move || reservations.with(|state| !state.can_book());

    view! {
        <li class="rounded-xl border border-border bg-surface-elevated p-4 space-y-1">
            <p class="font-semibold text-fg">{class.display_name()}</p>
            <p class="text-sm text-fg-muted">{class.display_description()}</p>
            <p class="text-sm text-fg">{format!("Hora: {}", format_class_time(class.start_time.as_deref()))}</p>
            <p class="text-sm text-fg">{duration_label(class.duration_minutes)}</p>
            <Show
                when=reserved
                fallback=move || view! {
                    <button
                        class="mt-2 inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=blocked
                        on:click=move |_| on_reserve.call(class_id)
                    >
                        {move || if booking() { "Reservando..." } else { "Reservar Clase" }}
                    </button>
                }
            >
                <p class="text-sm font-semibold text-status-success-text">
                    {"✓ Ya tienes reserva para esta clase"}
                </p>
            </Show>
        </li>
    }
}

#[component]
pub fn ClassList(
    classes: Vec<DirectedClass>,
    reservations: Signal<ReservationState>,
    on_reserve: Callback<EntityId>,
) -> impl IntoView {
    if classes.is_empty() {
        return view! {
            <p class="text-sm text-fg-muted">{"No hay clases dirigidas para este día."}</p>
        }
        .into_view();
    }
    view! {
        <ul class="space-y-3">
            {classes
                .into_iter()
                .map(|class| view! { <ClassCard class=class reservations=reservations on_reserve=on_reserve/> })
                .collect_view()}
        </ul>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Reservation, ReservationStatus};
    use crate::state::reservations::LoadedReservations;
    use crate::test_support::ssr::render_to_string;

    fn class(id: EntityId) -> DirectedClass {
        DirectedClass {
            id,
            name: Some(format!("Clase {}", id)),
            description: None,
            day: None,
            start_time: Some("18:30:00".into()),
            duration_minutes: Some(45),
        }
    }

    fn state_with(class_id: EntityId) -> ReservationState {
        ReservationState {
            loaded: LoadedReservations::from_reservations(vec![Reservation {
                id: 1,
                user_id: Some(7),
                class_ref: Some(class(class_id)),
                status: ReservationStatus::Confirmed,
                date: None,
                time: None,
                location: None,
            }]),
            ..ReservationState::default()
        }
    }

    #[test]
    fn reserved_class_shows_badge_instead_of_button() {
        let html = render_to_string(move || {
            let state = create_rw_signal(state_with(42));
            let on_reserve = Callback::new(|_: EntityId| {});
            view! {
                <ClassList
                    classes=vec![class(42), class(43)]
                    reservations=state.into()
                    on_reserve=on_reserve
                />
            }
        });
        assert!(html.contains("Ya tienes reserva para esta clase"));
        assert!(html.contains("Reservar Clase"));
        assert!(html.contains("Hora: 18:30"));
        assert!(html.contains("Sin descripción"));
        assert!(html.contains("Duración: 45 minutos"));
    }

    #[test]
    fn booking_button_disabled_until_reservations_load() {
        let render = |loading: bool| {
            render_to_string(move || {
                let state = create_rw_signal(ReservationState {
                    loading,
                    ..ReservationState::default()
                });
                view! {
                    <ClassList
                        classes=vec![class(43)]
                        reservations=state.into()
                        on_reserve=Callback::new(|_: EntityId| {})
                    />
                }
            })
        };
        assert!(render(true).contains("disabled"));
        assert!(!render(false).contains("disabled"));
    }

    #[test]
    fn empty_day_has_message() {
        let html = render_to_string(move || {
            let state = create_rw_signal(ReservationState::default());
            view! {
                <ClassList
                    classes=Vec::new()
                    reservations=state.into()
                    on_reserve=Callback::new(|_: EntityId| {})
                />
            }
        });
        assert!(html.contains("No hay clases dirigidas para este día."));
    }
}
