use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::CoachPanel;
pub use utils::CoachRole;

#[component]
pub fn TrainerDashboardPage() -> impl IntoView {
    view! { <CoachPanel role=CoachRole::Trainer /> }
}

#[component]
pub fn NutritionistDashboardPage() -> impl IntoView {
    view! { <CoachPanel role=CoachRole::Nutritionist /> }
}
