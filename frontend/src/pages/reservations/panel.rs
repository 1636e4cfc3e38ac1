use leptos::*;

use crate::{
    api::{ApiClient, ApiError, Reservation},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    pages::classes::utils::duration_label,
    state::session::use_session,
    utils::time::{format_class_time, format_date},
};

pub const EMPTY_RESERVATIONS_MESSAGE: &str = "No tienes clases reservadas.";

/// Date and time of a reservation, preferring the class schedule over the
/// reservation's own fields.
pub fn schedule_line(reservation: &Reservation) -> String {
    let class = reservation.class_ref.as_ref();
    let day = class
        .and_then(|c| c.day)
        .or(reservation.date)
        .map(format_date)
        .unwrap_or_else(|| "Fecha no disponible".to_string());
    let time = class
        .and_then(|c| c.start_time.as_deref())
        .or(reservation.time.as_deref());
    format!("Día: {} · Hora: {}", day, format_class_time(time))
}

#[component]
pub fn ReservationItem(reservation: Reservation) -> impl IntoView {
    let name = reservation
        .class_ref
        .as_ref()
        .map(|c| c.display_name())
        .unwrap_or_else(|| "Clase sin nombre".to_string());
    let duration = duration_label(
        reservation
            .class_ref
            .as_ref()
            .and_then(|c| c.duration_minutes),
    );
    view! {
        <li class="rounded-xl border border-border bg-surface-elevated p-4 space-y-1">
            <div class="flex items-center justify-between">
                <p class="font-semibold text-fg">{name}</p>
                <span class="text-xs font-semibold uppercase text-fg-muted">{reservation.status.label()}</span>
            </div>
            <p class="text-sm text-fg">{schedule_line(&reservation)}</p>
            <p class="text-sm text-fg-muted">{duration}</p>
            {reservation.location.clone().map(|place| view! {
                <p class="text-sm text-fg-muted">{format!("Lugar: {}", place)}</p>
            })}
        </li>
    }
}

#[component]
pub fn ReservationsPanel() -> impl IntoView {
    let session = use_session();
    let api = session.authorized(&use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let user_id = session.current().map(|s| s.user.id);

    let reservations = create_resource(
        move || user_id,
        move |user_id| {
            let api = api.clone();
            async move {
                match user_id {
                    Some(id) => api.list_reservations(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );
    let error = Signal::derive(move || {
        reservations.get().and_then(|result| {
            result
                .err()
                .map(|_| ApiError::unknown("No se pudieron cargar las reservas."))
        })
    });

    view! {
        <Layout>
            <div class="space-y-4 px-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">{"Mis reservas"}</h2>
                    <a href="/menu" class="text-sm text-fg-muted">{"Volver al Menú"}</a>
                </div>
                <InlineErrorMessage error=error/>
                <Transition fallback=|| view! { <LoadingSpinner/> }>
                    {move || reservations.get().and_then(Result::ok).map(|items| {
                        if items.is_empty() {
                            view! { <EmptyState title=EMPTY_RESERVATIONS_MESSAGE/> }.into_view()
                        } else {
                            view! {
                                <ul class="space-y-3">
                                    {items
                                        .into_iter()
                                        .map(|reservation| view! { <ReservationItem reservation=reservation/> })
                                        .collect_view()}
                                </ul>
                            }
                            .into_view()
                        }
                    })}
                </Transition>
            </div>
        </Layout>
    }
}
