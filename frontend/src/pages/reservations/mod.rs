use leptos::*;

mod panel;

pub use panel::{ReservationItem, ReservationsPanel};

#[component]
pub fn ReservationsPage() -> impl IntoView {
    view! { <ReservationsPanel /> }
}
