use crate::api::ApiError;
use leptos::*;

/// Connectivity failures get a retry hint; backend messages are shown as-is.
fn hint_for(error: &ApiError) -> Option<&'static str> {
    if error.is_connectivity() {
        Some("Comprueba tu conexión e inténtalo de nuevo.")
    } else {
        None
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if e.code == "VALIDATION_ERROR" {
                        if let Some(errors) = e
                            .details
                            .as_ref()
                            .and_then(|details| details.get("errors"))
                            .and_then(|v| v.as_array())
                        {
                            return view! {
                                <ul class="list-disc list-inside text-sm">
                                    {errors.iter().map(|err| {
                                        view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                    }).collect_view()}
                                </ul>
                            }.into_view();
                        }
                    }
                    match hint_for(&e) {
                        Some(hint) => view! { <div class="text-xs opacity-75">{hint}</div> }.into_view(),
                        None => ().into_view(),
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError::validation("Revisa el formulario").with_details(json!({
                "errors": ["El email no es válido", "Las contraseñas no coinciden"]
            }));
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Revisa el formulario"));
        assert!(html.contains("El email no es válido"));
        assert!(html.contains("Las contraseñas no coinciden"));
    }

    #[test]
    fn connectivity_errors_include_retry_hint() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed(
                "Error de conexión. Inténtelo de nuevo.",
            )));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Error de conexión"));
        assert!(html.contains("Comprueba tu conexión"));
    }

    #[test]
    fn backend_errors_render_message_only() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::http(409, "Clase completa")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Clase completa"));
        assert!(!html.contains("Comprueba tu conexión"));
    }

    #[test]
    fn nothing_renders_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("bg-status-error-bg"));
    }
}
