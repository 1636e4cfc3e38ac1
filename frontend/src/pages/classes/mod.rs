use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ClassesPanel;

#[component]
pub fn ClassesPage() -> impl IntoView {
    view! { <ClassesPanel /> }
}
