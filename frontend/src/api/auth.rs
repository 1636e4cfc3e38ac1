use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, NewUser, UserProfile},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/users/login").await;
        log::info!("login attempt for {}", request.username);
        self.send_json(
            self.http_client().post(&url).json(request),
            "Error en la autenticación",
        )
        .await
    }

    pub async fn register(&self, user: &NewUser) -> Result<Option<UserProfile>, ApiError> {
        let url = self.endpoint("/users").await;
        self.send_created(
            self.http_client().post(&url).json(user),
            "Error al registrar usuario",
        )
        .await
    }
}
