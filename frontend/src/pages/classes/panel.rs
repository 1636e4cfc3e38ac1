use std::collections::BTreeSet;

use chrono::NaiveDate;
use leptos::*;

use super::{
    components::{calendar::ClassCalendar, class_list::ClassList},
    utils::{long_date, BookingFeedback, CLASSES_LOAD_ERROR, DAY_LOAD_ERROR},
    view_model::{use_classes_view_model, ClassesViewModel},
};
use crate::{
    api::EntityId,
    components::layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
    state::reservations::RESERVATIONS_INCOMPLETE_MESSAGE,
};

#[component]
fn Feedback(feedback: RwSignal<Option<BookingFeedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|feedback| match feedback {
            BookingFeedback::Success(message) => view! { <SuccessMessage message=message/> }.into_view(),
            BookingFeedback::Error { title, message } => {
                view! { <ErrorMessage message=format!("{}: {}", title, message)/> }.into_view()
            }
        })
    }
}

#[component]
fn ClassesContent(vm: ClassesViewModel) -> impl IntoView {
    let reservations = vm.reconciler.state();
    let calendar_resource = vm.calendar_resource;
    let day_resource = vm.day_resource;
    let selected_day = vm.selected_day;

    let marked = Signal::derive(move || {
        calendar_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_else(BTreeSet::new)
    });
    let calendar_failed = move || matches!(calendar_resource.get(), Some(Err(_)));
    let reservations_warning = move || reservations.with(|state| state.loaded.warning.is_some());

    let vm_select = vm.clone();
    let on_select = Callback::new(move |day: NaiveDate| vm_select.select_day(day));
    let vm_previous = vm.clone();
    let on_previous = Callback::new(move |_: ()| vm_previous.show_previous_month());
    let vm_next = vm.clone();
    let on_next = Callback::new(move |_: ()| vm_next.show_next_month());
    let vm_reserve = vm.clone();
    let on_reserve = Callback::new(move |class_id: EntityId| vm_reserve.reserve(class_id));

    view! {
        <div class="space-y-6 px-4">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-fg">{"Clases Dirigidas"}</h2>
                <a href="/menu" class="text-sm text-fg-muted">{"Volver al Menú"}</a>
            </div>
            <Show when=calendar_failed>
                <ErrorMessage message=CLASSES_LOAD_ERROR/>
            </Show>
            <Show when=reservations_warning>
                <ErrorMessage message=RESERVATIONS_INCOMPLETE_MESSAGE/>
            </Show>
            <Feedback feedback=vm.feedback/>
            <div class="grid gap-6 lg:grid-cols-2">
                <ClassCalendar
                    month=vm.month.into()
                    marked=marked
                    selected=selected_day.into()
                    on_select=on_select
                    on_previous=on_previous
                    on_next=on_next
                />
                <div class="space-y-3">
                    {move || match selected_day.get() {
                        None => view! {
                            <p class="text-sm text-fg-muted">
                                {"Selecciona un día para ver las clases disponibles."}
                            </p>
                        }
                        .into_view(),
                        Some(day) => view! {
                            <h3 class="font-semibold text-fg">{format!("Clases para el {}", long_date(day))}</h3>
                            <Transition fallback=|| view! { <LoadingSpinner/> }>
                                {move || day_resource.get().map(|result| match result {
                                    Ok(classes) => view! {
                                        <ClassList classes=classes reservations=reservations on_reserve=on_reserve/>
                                    }
                                    .into_view(),
                                    Err(err) => {
                                        log::warn!("classes for day unavailable: {}", err);
                                        view! { <ErrorMessage message=DAY_LOAD_ERROR/> }.into_view()
                                    }
                                })}
                            </Transition>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ClassesPanel() -> impl IntoView {
    let vm = use_classes_view_model();
    view! {
        <Layout>
            {match vm {
                Some(vm) => view! { <ClassesContent vm=vm/> }.into_view(),
                None => view! { <LoadingSpinner/> }.into_view(),
            }}
        </Layout>
    }
}
