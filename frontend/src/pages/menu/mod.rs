use leptos::*;

mod panel;

pub use panel::ClientMenuPanel;

#[component]
pub fn ClientMenuPage() -> impl IntoView {
    view! { <ClientMenuPanel /> }
}
