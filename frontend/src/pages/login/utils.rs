use crate::api::{ApiError, LoginRequest};
use leptos::*;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Usuario y contraseña son requeridos";
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión. Inténtelo de nuevo.";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        validate_credentials(
            &self.username.get_untracked(),
            &self.password.get_untracked(),
        )
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}

/// Username is trimmed; the password is sent exactly as typed.
pub fn validate_credentials(username: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::validation(MISSING_CREDENTIALS_MESSAGE));
    }
    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Transport failures get the generic connection text; anything the backend
/// said is shown verbatim.
pub fn login_error(err: ApiError) -> ApiError {
    if err.is_connectivity() {
        ApiError::request_failed(CONNECTION_ERROR_MESSAGE)
    } else {
        err
    }
}
