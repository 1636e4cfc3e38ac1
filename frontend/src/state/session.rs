use std::rc::Rc;

use leptos::*;
use thiserror::Error;

use crate::{
    api::{ApiClient, ApiError, LoginRequest, LoginResponse, RoleFlags, UserProfile},
    router::Dashboard,
    utils::storage::{default_store, KeyValueStore, StorageError},
};

pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USER_DATA_KEY: &str = "userData";
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored session is corrupt: {0}")]
    Corrupt(String),
    #[error("stored session has no user")]
    MissingUser,
}

/// Authenticated identity for this device. Immutable until the next login.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: UserProfile,
    pub roles: RoleFlags,
}

impl Session {
    pub fn from_login(response: LoginResponse) -> Self {
        let roles = response.roles();
        Self {
            token: response.token.filter(|t| !t.is_empty()),
            user: response.user,
            roles,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::for_roles(self.roles)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GateState {
    #[default]
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

impl GateState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GateState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, GateState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            GateState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Only the literal `"true"` counts; read failures count as logged out.
pub fn read_login_flag(store: &dyn KeyValueStore) -> bool {
    match store.get_item(IS_LOGGED_IN_KEY) {
        Ok(flag) => flag.as_deref() == Some("true"),
        Err(err) => {
            log::warn!("session flag unreadable, treating as logged out: {}", err);
            false
        }
    }
}

pub fn parse_stored_session(raw: &str) -> Result<Session, SessionError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| SessionError::Corrupt(e.to_string()))?;
    match value.get("user") {
        Some(user) if user.is_object() => {}
        _ => return Err(SessionError::MissingUser),
    }
    let response: LoginResponse =
        serde_json::from_value(value).map_err(|e| SessionError::Corrupt(e.to_string()))?;
    Ok(Session::from_login(response))
}

/// `Ok(None)` means nobody is logged in on this device.
pub fn load_session(store: &dyn KeyValueStore) -> Result<Option<Session>, SessionError> {
    if store.get_item(IS_LOGGED_IN_KEY)?.as_deref() != Some("true") {
        return Ok(None);
    }
    let raw = store
        .get_item(USER_DATA_KEY)?
        .ok_or(SessionError::MissingUser)?;
    parse_stored_session(&raw).map(Some)
}

/// Startup decision. Never fails open: anything short of a readable flag and
/// a well-formed stored session ends up unauthenticated.
pub fn evaluate_gate(store: &dyn KeyValueStore) -> GateState {
    if !read_login_flag(store) {
        return GateState::Unauthenticated;
    }
    match load_session(store) {
        Ok(Some(session)) => GateState::Authenticated(session),
        Ok(None) => GateState::Unauthenticated,
        Err(SessionError::Storage(err)) => {
            log::warn!("stored session unreadable: {}", err);
            GateState::Unauthenticated
        }
        Err(err) => {
            log::warn!("discarding stored session: {}", err);
            if let Err(clear_err) = clear_session(store) {
                log::warn!("failed to clear stale session: {}", clear_err);
            }
            GateState::Unauthenticated
        }
    }
}

pub fn persist_session(
    store: &dyn KeyValueStore,
    response: &LoginResponse,
) -> Result<Session, SessionError> {
    let serialized =
        serde_json::to_string(response).map_err(|e| SessionError::Corrupt(e.to_string()))?;
    store.set_item(USER_DATA_KEY, &serialized)?;
    store.set_item(TOKEN_KEY, response.token.as_deref().unwrap_or_default())?;
    store.set_item(IS_LOGGED_IN_KEY, "true")?;
    Ok(Session::from_login(response.clone()))
}

/// Removes every session key even when one removal fails; reports the first failure.
pub fn clear_session(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    [IS_LOGGED_IN_KEY, USER_DATA_KEY, TOKEN_KEY]
        .into_iter()
        .map(|key| store.remove_item(key))
        .fold(Ok(()), |acc, result| acc.and(result))
}

/// The one session object every screen receives through context.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn KeyValueStore>,
    state: RwSignal<GateState>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            state: create_rw_signal(GateState::Loading),
        }
    }

    pub fn with_state(store: Rc<dyn KeyValueStore>, state: GateState) -> Self {
        Self {
            store,
            state: create_rw_signal(state),
        }
    }

    pub fn state(&self) -> Signal<GateState> {
        self.state.into()
    }

    pub fn current(&self) -> Option<Session> {
        self.state.with_untracked(|state| state.session().cloned())
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn load(&self) -> GateState {
        let resolved = evaluate_gate(self.store.as_ref());
        let _ = self.state.try_set(resolved.clone());
        resolved
    }

    pub fn establish(&self, response: &LoginResponse) -> Result<Session, SessionError> {
        let session = persist_session(self.store.as_ref(), response)?;
        log::info!(
            "session established for user {} ({:?})",
            session.user.id,
            session.dashboard()
        );
        let _ = self
            .state
            .try_set(GateState::Authenticated(session.clone()));
        Ok(session)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        let result = clear_session(self.store.as_ref());
        let _ = self.state.try_set(GateState::Unauthenticated);
        result
    }

    /// The backend client carrying this session's token, if any.
    pub fn authorized(&self, api: &ApiClient) -> ApiClient {
        api.with_token(self.current().and_then(|session| session.token))
    }
}

#[component]
pub fn SessionProvider(
    #[prop(optional)] store: Option<Rc<dyn KeyValueStore>>,
    children: Children,
) -> impl IntoView {
    let ctx = SessionContext::new(store.unwrap_or_else(default_store));
    provide_context(ctx.clone());
    create_effect(move |loaded: Option<()>| {
        if loaded.is_none() {
            ctx.load();
        }
    });
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(default_store()))
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    session: &SessionContext,
) -> Result<Dashboard, ApiError> {
    let response = api.login(&request).await?;
    let established = session.establish(&response).map_err(|err| {
        log::error!("failed to persist session: {}", err);
        ApiError::unknown("No se pudo guardar la sesión en este dispositivo.")
    })?;
    Ok(established.dashboard())
}

pub fn logout(session: &SessionContext) {
    if let Err(err) = session.clear() {
        log::error!("error during logout: {}", err);
    }
}

pub fn use_login_action() -> Action<LoginRequest, Result<Dashboard, ApiError>> {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let session = session.clone();
        async move { login_request(payload, &api, &session).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{failing_store, login_response, with_runtime};
    use crate::utils::storage::MemoryStorage;

    fn logged_in_store(response: &LoginResponse) -> MemoryStorage {
        let store = MemoryStorage::new();
        persist_session(&store, response).unwrap();
        store
    }

    #[test]
    fn flag_true_with_valid_user_data_is_authenticated() {
        let store = logged_in_store(&login_response(7, false, false));
        let state = evaluate_gate(&store);
        assert!(state.is_authenticated());
        assert_eq!(state.session().map(|s| s.user.id), Some(7));
    }

    #[test]
    fn any_other_flag_value_is_unauthenticated() {
        for flag in [None, Some("false"), Some("TRUE"), Some("1"), Some("")] {
            let store = logged_in_store(&login_response(7, false, false));
            match flag {
                Some(value) => store.set_item(IS_LOGGED_IN_KEY, value).unwrap(),
                None => store.remove_item(IS_LOGGED_IN_KEY).unwrap(),
            }
            assert_eq!(evaluate_gate(&store), GateState::Unauthenticated, "{flag:?}");
        }
    }

    #[test]
    fn storage_read_failure_fails_closed() {
        let store = failing_store();
        assert_eq!(evaluate_gate(&store), GateState::Unauthenticated);
        assert!(!read_login_flag(&store));
    }

    #[test]
    fn malformed_user_data_is_unauthenticated_and_cleared() {
        let store = MemoryStorage::with_items([
            (IS_LOGGED_IN_KEY, "true"),
            (USER_DATA_KEY, "{not json"),
            (TOKEN_KEY, "t"),
        ]);
        assert_eq!(evaluate_gate(&store), GateState::Unauthenticated);
        assert!(store.is_empty());
    }

    #[test]
    fn user_data_without_user_is_rejected() {
        assert_eq!(
            parse_stored_session(r#"{"token":"t"}"#),
            Err(SessionError::MissingUser)
        );
        let store =
            MemoryStorage::with_items([(IS_LOGGED_IN_KEY, "true"), (USER_DATA_KEY, r#"{"token":"t"}"#)]);
        assert_eq!(evaluate_gate(&store), GateState::Unauthenticated);
    }

    #[test]
    fn flag_without_user_data_is_unauthenticated() {
        let store = MemoryStorage::with_items([(IS_LOGGED_IN_KEY, "true")]);
        assert_eq!(load_session(&store), Err(SessionError::MissingUser));
        assert_eq!(evaluate_gate(&store), GateState::Unauthenticated);
    }

    #[test]
    fn persist_writes_all_keys_and_clear_removes_them() {
        let store = MemoryStorage::new();
        let session = persist_session(&store, &login_response(3, true, false)).unwrap();
        assert_eq!(session.token.as_deref(), Some("tok-3"));
        assert_eq!(store.get_item(IS_LOGGED_IN_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("tok-3"));
        let stored = store.get_item(USER_DATA_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(value["entrenador"], true);

        clear_session(&store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn context_lifecycle_moves_through_gate_states() {
        with_runtime(|| {
            let ctx = SessionContext::new(Rc::new(MemoryStorage::new()));
            assert!(ctx.state().get_untracked().is_loading());
            assert_eq!(ctx.load(), GateState::Unauthenticated);

            ctx.establish(&login_response(9, false, true)).unwrap();
            assert_eq!(ctx.current().map(|s| s.dashboard()), Some(Dashboard::Nutritionist));
            assert!(ctx.load().is_authenticated());

            ctx.clear().unwrap();
            assert_eq!(ctx.state().get_untracked(), GateState::Unauthenticated);
            assert!(ctx.current().is_none());
        });
    }

    #[test]
    fn authorized_client_carries_session_token() {
        with_runtime(|| {
            let ctx = SessionContext::new(Rc::new(MemoryStorage::new()));
            let api = ApiClient::new_with_base_url("http://localhost/api");
            assert_eq!(ctx.authorized(&api).token(), None);
            ctx.establish(&login_response(1, false, false)).unwrap();
            assert_eq!(ctx.authorized(&api).token(), Some("tok-1"));
        });
    }

    #[test]
    fn use_session_without_context_starts_loading() {
        with_runtime(|| {
            let ctx = use_session();
            assert!(ctx.state().get_untracked().is_loading());
        });
    }
}
