use crate::{
    api::ApiError, components::error::InlineErrorMessage, pages::login::utils::LoginFormState,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border placeholder-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {"Iniciar sesión"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {"Accede a tus clases, reservas e informes"}
                    </p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="username" class="sr-only">{"Usuario"}</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            autocomplete="username"
                            class=INPUT_CLASS
                            placeholder="Usuario"
                            prop:value=form.username
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.username.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">{"Contraseña"}</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            placeholder="Contraseña"
                            prop:value=form.password
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.password.set(target.value());
                            }
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    {"¿No tienes cuenta? "}
                    <a href="/signup" class="font-medium text-action-primary-bg">{"Regístrate"}</a>
                </p>
            </div>
        </div>
    }
}
