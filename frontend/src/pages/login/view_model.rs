use super::utils::{login_error, LoginFormState};
use crate::api::{ApiError, LoginRequest};
use crate::router::Dashboard;
use crate::state::session::use_login_action;
use crate::utils::navigation::redirect;
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<Dashboard, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(dashboard) => {
                    error.set(None);
                    form.clear_password();
                    redirect(dashboard.path());
                }
                Err(err) => error.set(Some(login_error(err))),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::login::utils::MISSING_CREDENTIALS_MESSAGE;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.username.get().is_empty());
        });
    }

    #[test]
    fn submit_with_blank_fields_sets_validation_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.form.username.set("ana".into());
            vm.submit();
            assert_eq!(
                vm.error.get_untracked().map(|e| e.error),
                Some(MISSING_CREDENTIALS_MESSAGE.to_string())
            );
            assert!(!vm.login_action.pending().get_untracked());
        });
    }
}
