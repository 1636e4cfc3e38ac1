use leptos::*;

use crate::api::{ApiError, EntityId, Reservation, UserProfile};
use crate::components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner};
use crate::pages::reservations::ReservationItem;

fn measurement(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{} {}", v, unit))
        .unwrap_or_else(|| "Sin datos".to_string())
}

/// Profile figures shown next to a client's name, in display order.
pub fn client_facts(client: &UserProfile) -> Vec<(&'static str, String)> {
    vec![
        ("Email", client.email.clone().unwrap_or_else(|| "Sin datos".into())),
        ("Teléfono", client.telefono.clone().unwrap_or_else(|| "Sin datos".into())),
        ("Peso", measurement(client.peso, "kg")),
        ("Altura", measurement(client.altura, "cm")),
        ("Masa muscular", measurement(client.masa_muscular, "kg")),
        (
            "Deporte",
            client
                .tipo_deporte
                .clone()
                .unwrap_or_else(|| "Sin datos".into()),
        ),
    ]
}

#[component]
pub fn ClientDetail(
    client: UserProfile,
    reservations: Resource<Option<EntityId>, Result<Vec<Reservation>, ApiError>>,
) -> impl IntoView {
    let error = Signal::derive(move || reservations.get().and_then(Result::err));
    view! {
        <section class="space-y-4">
            <div class="rounded-xl border border-border bg-surface-elevated p-4">
                <h3 class="text-lg font-semibold text-fg">{client.full_name()}</h3>
                <dl class="mt-2 grid grid-cols-2 gap-2 text-sm">
                    {client_facts(&client)
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt class="text-fg-muted">{label}</dt>
                            <dd class="text-fg">{value}</dd>
                        })
                        .collect_view()}
                </dl>
            </div>
            <h4 class="font-semibold text-fg">"Clases reservadas"</h4>
            <InlineErrorMessage error=error/>
            <Transition fallback=|| view! { <LoadingSpinner/> }>
                {move || reservations.get().and_then(Result::ok).map(|list| {
                    if list.is_empty() {
                        return view! { <EmptyState title="Este cliente no tiene clases reservadas."/> }
                            .into_view();
                    }
                    view! {
                        <ul class="space-y-2">
                            {list
                                .into_iter()
                                .map(|reservation| view! { <ReservationItem reservation=reservation/> })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                })}
            </Transition>
        </section>
    }
}
