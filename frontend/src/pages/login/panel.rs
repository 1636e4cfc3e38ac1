use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let form = vm.form;
    let error = vm.error;

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            form=form
            error=error.into()
            pending=pending.into()
            on_submit=handle_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::GateState;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_login_form_with_signup_link() {
        let html = render_to_string(move || {
            provide_session(GateState::Unauthenticated);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Iniciar sesión"));
        assert!(html.contains("href=\"/signup\""));
    }
}
