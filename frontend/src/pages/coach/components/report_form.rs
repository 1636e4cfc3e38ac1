use leptos::*;

use super::super::utils::{CoachRole, ReportDraft};
use crate::api::ApiError;
use crate::components::{common::Button, error::InlineErrorMessage, layout::SuccessMessage};

const INPUT_CLASS: &str = "w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm";

#[component]
fn DraftInput(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="block space-y-1">
            <span class="text-sm font-medium text-fg">{label}</span>
            <input
                type=input_type
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn ReportForm(
    role: CoachRole,
    draft: RwSignal<ReportDraft>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] success: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_change: Callback<ReportDraft>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let field = move |read: fn(&ReportDraft) -> String| Signal::derive(move || draft.with(read));
    let setter = move |write: fn(&mut ReportDraft, String)| {
        Callback::new(move |value: String| {
            let mut next = draft.get_untracked();
            write(&mut next, value);
            on_change.call(next);
        })
    };

    view! {
        <form
            class="space-y-3 rounded-xl border border-border bg-surface-elevated p-4"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <h4 class="font-semibold text-fg">{role.report_title()}</h4>
            <DraftInput
                label="Peso (kg)"
                input_type="number"
                value=field(|d| d.weight.clone())
                on_change=setter(|d, v| d.weight = v)
            />
            {role.tracks_muscle_mass().then(|| view! {
                <DraftInput
                    label="Masa muscular (kg)"
                    input_type="number"
                    value=field(|d| d.muscle_mass.clone())
                    on_change=setter(|d, v| d.muscle_mass = v)
                />
            })}
            {(role == CoachRole::Trainer).then(|| view! {
                <div class="grid grid-cols-3 gap-3">
                    <DraftInput
                        label="Repeticiones"
                        input_type="number"
                        value=field(|d| d.repetitions.clone())
                        on_change=setter(|d, v| d.repetitions = v)
                    />
                    <DraftInput
                        label="Series"
                        input_type="number"
                        value=field(|d| d.sets.clone())
                        on_change=setter(|d, v| d.sets = v)
                    />
                    <DraftInput
                        label="Frecuencia cardíaca"
                        input_type="number"
                        value=field(|d| d.heart_rate.clone())
                        on_change=setter(|d, v| d.heart_rate = v)
                    />
                </div>
            })}
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Notas"</span>
                <textarea
                    class=INPUT_CLASS
                    rows="4"
                    prop:value=move || draft.with(|d| d.notes.clone())
                    on:input=move |ev| {
                        let mut next = draft.get_untracked();
                        next.notes = event_target_value(&ev);
                        on_change.call(next);
                    }
                ></textarea>
            </label>
            <InlineErrorMessage error=error/>
            {move || success.get().map(|message| view! { <SuccessMessage message=message/> })}
            <Button loading=pending attr:type="submit">"Enviar informe"</Button>
        </form>
    }
}
