#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::{future::Future, rc::Rc};

    use crate::api::{LoginResponse, UserProfile};
    use crate::state::session::{GateState, Session, SessionContext};
    use crate::utils::storage::{KeyValueStore, MemoryStorage, StorageError};
    use leptos::*;

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    pub async fn with_runtime_async<F, Fut, T>(f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let runtime = create_runtime();
        let result = f().await;
        runtime.dispose();
        result
    }

    pub fn user(id: i64, trainer: bool, nutritionist: bool) -> UserProfile {
        UserProfile {
            id,
            username: Some(format!("user{id}")),
            nombre: "Ana".into(),
            apellidos: "Ruiz".into(),
            email: Some(format!("user{id}@gym.test")),
            telefono: None,
            entrenador: trainer,
            nutricionista: nutritionist,
            peso: None,
            altura: None,
            masa_muscular: None,
            tipo_deporte: None,
        }
    }

    pub fn client_user() -> UserProfile {
        user(7, false, false)
    }

    pub fn trainer_user() -> UserProfile {
        user(2, true, false)
    }

    pub fn nutritionist_user() -> UserProfile {
        user(3, false, true)
    }

    pub fn login_response(id: i64, trainer: bool, nutritionist: bool) -> LoginResponse {
        LoginResponse {
            token: Some(format!("tok-{id}")),
            user: user(id, trainer, nutritionist),
            entrenador: trainer,
            nutricionista: nutritionist,
        }
    }

    /// Store whose every operation fails, like a browser with storage disabled.
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("denied".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("denied".into()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("denied".into()))
        }
    }

    pub fn failing_store() -> FailingStore {
        FailingStore
    }

    /// Provides a session context already resolved to `state`.
    pub fn provide_session(state: GateState) -> SessionContext {
        let ctx = SessionContext::with_state(Rc::new(MemoryStorage::new()), state);
        provide_context(ctx.clone());
        ctx
    }

    pub fn provide_signed_in(user: UserProfile) -> SessionContext {
        let roles = user.roles();
        provide_session(GateState::Authenticated(Session {
            token: Some("tok".into()),
            user,
            roles,
        }))
    }
}
