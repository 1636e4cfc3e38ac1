use crate::{
    components::layout::LoadingSpinner,
    router::LOGIN_PATH,
    state::session::{use_session, GateState},
    utils::navigation::redirect,
};
use leptos::*;

/// Where the app entry sends a resolved session: login when signed out,
/// otherwise the role's dashboard.
fn entry_target(state: &GateState) -> Option<&'static str> {
    match state {
        GateState::Loading => None,
        GateState::Unauthenticated => Some(LOGIN_PATH),
        GateState::Authenticated(session) => Some(session.dashboard().path()),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let is_loading = create_memo(move |_| state.get().is_loading());

    create_effect(move |_| {
        if let Some(target) = entry_target(&state.get()) {
            redirect(target);
        }
    });

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "¡Bienvenido!"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg">
                        "Reserva tus clases y sigue tu progreso con tu entrenador y nutricionista."
                    </p>
                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! { <LoadingSpinner/> }
                    >
                        <div class="mt-8 flex flex-col gap-3 max-w-xs mx-auto">
                            <a href="/login" class="px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover">
                                "Iniciar sesión"
                            </a>
                            <a href="/signup" class="px-8 py-3 rounded-md text-base font-medium border border-border text-fg hover:bg-action-ghost-bg-hover">
                                "Registrarse"
                            </a>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{failing_store, provide_session};
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    #[test]
    fn spinner_while_gate_is_loading() {
        let html = render_to_string(move || {
            provide_session(GateState::Loading);
            view! { <HomePage/> }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("href=\"/signup\""));
    }

    #[test]
    fn unreadable_storage_lands_on_login_links_without_crashing() {
        let html = render_to_string(move || {
            let ctx = crate::state::session::SessionContext::new(Rc::new(failing_store()));
            provide_context(ctx.clone());
            assert_eq!(ctx.load(), GateState::Unauthenticated);
            view! { <HomePage/> }
        });
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("href=\"/signup\""));
    }
}
