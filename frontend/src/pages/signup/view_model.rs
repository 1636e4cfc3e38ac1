use super::{
    repository,
    utils::{validate_sign_up, FieldErrors, SignUpDraft, SignUpField},
};
use crate::api::{ApiClient, ApiError, NewUser};
use crate::router::LOGIN_PATH;
use crate::utils::{navigation::redirect, time::today};
use leptos::*;

pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Te has registrado correctamente.";

#[derive(Clone, Copy)]
pub struct SignUpViewModel {
    pub draft: RwSignal<SignUpDraft>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub register_action: Action<NewUser, Result<(), ApiError>>,
}

impl SignUpViewModel {
    pub fn update(&self, field: SignUpField, value: String) {
        self.draft.update(|draft| draft.set(field, value));
        self.field_errors.update(|errors| {
            errors.remove(&field);
        });
    }

    pub fn field_error(&self, field: SignUpField) -> Option<&'static str> {
        self.field_errors.with(|errors| errors.get(&field).copied())
    }

    /// Validates locally; nothing is sent while any field is invalid.
    pub fn submit(&self) -> bool {
        if self.register_action.pending().get_untracked() {
            return false;
        }
        let draft = self.draft.get_untracked();
        match validate_sign_up(&draft, today()) {
            Ok(user) => {
                self.field_errors.set(FieldErrors::new());
                self.error.set(None);
                self.register_action.dispatch(user);
                true
            }
            Err(errors) => {
                log::info!("sign-up blocked by {} invalid field(s)", errors.len());
                self.field_errors.set(errors);
                false
            }
        }
    }
}

pub fn use_sign_up_view_model() -> SignUpViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let draft = create_rw_signal(SignUpDraft::default());
    let field_errors = create_rw_signal(FieldErrors::new());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let register_action = create_action(move |user: &NewUser| {
        let api = api.clone();
        let user = user.clone();
        async move { repository::register(&api, user).await }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    success.set(Some(SIGN_UP_SUCCESS_MESSAGE.to_string()));
                    redirect(LOGIN_PATH);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SignUpViewModel {
        draft,
        field_errors,
        error,
        success,
        register_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn invalid_draft_is_not_dispatched() {
        with_runtime(|| {
            let vm = use_sign_up_view_model();
            vm.update(SignUpField::Nombre, "Ana".into());
            assert!(!vm.submit());
            assert_eq!(vm.field_error(SignUpField::Email), Some("Email requerido"));
            assert_eq!(vm.field_error(SignUpField::Nombre), None);
            assert!(!vm.register_action.pending().get_untracked());
        });
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        with_runtime(|| {
            let vm = use_sign_up_view_model();
            vm.submit();
            assert!(vm.field_error(SignUpField::Dni).is_some());
            vm.update(SignUpField::Dni, "1".into());
            assert!(vm.field_error(SignUpField::Dni).is_none());
        });
    }
}
