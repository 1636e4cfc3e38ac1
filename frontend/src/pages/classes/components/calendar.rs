use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::pages::classes::utils::MonthCursor;

const WEEKDAY_HEADERS: [&str; 7] = ["L", "M", "X", "J", "V", "S", "D"];

fn day_classes(is_selected: bool, is_marked: bool) -> &'static str {
    match (is_selected, is_marked) {
        (true, _) => "bg-action-primary-bg text-action-primary-text font-bold",
        (false, true) => "text-fg font-semibold underline decoration-action-primary-bg decoration-2",
        (false, false) => "text-fg-muted",
    }
}

#[component]
pub fn ClassCalendar(
    month: Signal<MonthCursor>,
    marked: Signal<BTreeSet<NaiveDate>>,
    selected: Signal<Option<NaiveDate>>,
    on_select: Callback<NaiveDate>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-border bg-surface-elevated p-4 shadow-sm">
            <div class="flex items-center justify-between mb-3">
                <button class="px-2 py-1 text-fg-muted" on:click=move |_| on_previous.call(())>{"‹"}</button>
                <span class="font-semibold text-fg capitalize">{move || month.get().title()}</span>
                <button class="px-2 py-1 text-fg-muted" on:click=move |_| on_next.call(())>{"›"}</button>
            </div>
            <div class="grid grid-cols-7 gap-1 text-center text-xs text-fg-muted mb-1">
                {WEEKDAY_HEADERS.iter().map(|d| view! { <span>{*d}</span> }).collect_view()}
            </div>
            {move || {
                let marked = marked.get();
                let selected = selected.get();
                month
                    .get()
                    .weeks()
                    .into_iter()
                    .map(|week| {
                        view! {
                            <div class="grid grid-cols-7 gap-1 text-center">
                                {week
                                    .into_iter()
                                    .map(|cell| match cell {
                                        Some(day) => {
                                            let class = format!(
                                                "rounded-full h-9 w-9 mx-auto text-sm {}",
                                                day_classes(selected == Some(day), marked.contains(&day))
                                            );
                                            view! {
                                                <button
                                                    class=class
                                                    data-day=day.to_string()
                                                    on:click=move |_| on_select.call(day)
                                                >
                                                    {day.day()}
                                                </button>
                                            }
                                            .into_view()
                                        }
                                        None => view! { <span></span> }.into_view(),
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
