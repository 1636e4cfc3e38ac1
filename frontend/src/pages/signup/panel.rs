use super::{
    utils::SignUpField,
    view_model::{use_sign_up_view_model, SignUpViewModel},
};
use crate::components::{
    common::Button, error::InlineErrorMessage, layout::SuccessMessage,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
fn Field(vm: SignUpViewModel, field: SignUpField) -> impl IntoView {
    let id = format!("signup-{:?}", field).to_lowercase();
    view! {
        <div class="space-y-1">
            <label for=id.clone() class="block text-sm font-medium text-fg">{field.label()}</label>
            <input
                id=id
                type=field.input_type()
                class=move || {
                    let border = if vm.field_error(field).is_some() {
                        "border-status-error-border"
                    } else {
                        "border-form-control-border"
                    };
                    format!("block w-full rounded-md border px-3 py-2 text-sm text-fg {}", border)
                }
                prop:value=move || vm.draft.with(|draft| draft.value(field).to_string())
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    vm.update(field, target.value());
                }
            />
            {move || vm.field_error(field).map(|msg| view! {
                <p class="text-xs text-status-error-text">{msg}</p>
            })}
        </div>
    }
}

#[component]
fn Section(title: &'static str, vm: SignUpViewModel, fields: &'static [SignUpField]) -> impl IntoView {
    view! {
        <fieldset class="space-y-3">
            <legend class="text-lg font-semibold text-fg">{title}</legend>
            {fields
                .iter()
                .map(|field| view! { <Field vm=vm field=*field/> })
                .collect_view()}
        </fieldset>
    }
}

#[component]
pub fn SignUpPanel() -> impl IntoView {
    let vm = use_sign_up_view_model();
    let pending = vm.register_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen bg-surface py-10 px-4">
            <div class="max-w-xl mx-auto space-y-6">
                <a href="/" class="text-sm text-fg-muted">{"← Volver"}</a>
                <h2 class="text-3xl font-extrabold text-fg">{"Registro de Usuario"}</h2>
                <form class="space-y-6" on:submit=on_submit>
                    <Section title="Información Personal" vm=vm fields=SignUpField::PERSONAL/>
                    <Section title="Información Física" vm=vm fields=SignUpField::PHYSICAL/>
                    <Section title="Cuenta" vm=vm fields=SignUpField::ACCOUNT/>

                    <InlineErrorMessage error=vm.error/>
                    {move || vm.success.get().map(|msg| view! { <SuccessMessage message=msg/> })}

                    <Button class="w-full" loading=pending attr:type="submit">
                        {"Registrarse"}
                    </Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    {"¿Ya tienes cuenta? "}
                    <a href="/login" class="font-medium text-action-primary-bg">{"Inicia sesión"}</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_every_section_and_field() {
        let html = render_to_string(move || view! { <SignUpPanel/> });
        assert!(html.contains("Información Personal"));
        assert!(html.contains("Masa muscular (kg)"));
        assert!(html.contains("Confirmar contraseña"));
        assert!(html.contains("Registrarse"));
    }
}
