use leptos::*;

pub mod utils;

mod panel;

pub use panel::StaffPickerPanel;
pub use utils::StaffKind;

#[component]
pub fn ChooseTrainerPage() -> impl IntoView {
    view! { <StaffPickerPanel kind=StaffKind::Trainer /> }
}

#[component]
pub fn ChooseNutritionistPage() -> impl IntoView {
    view! { <StaffPickerPanel kind=StaffKind::Nutritionist /> }
}
