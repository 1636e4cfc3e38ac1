use super::{
    client::ApiClient,
    types::{ApiError, CreateReportRequest, EntityId, Report, UserProfile},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        let url = self.endpoint("/users").await;
        self.send_json(self.http_client().get(&url), "Error al cargar los clientes")
            .await
    }

    pub async fn list_trainers(&self) -> Result<Vec<UserProfile>, ApiError> {
        let url = self.endpoint("/users/entrenadores").await;
        self.send_json(
            self.http_client().get(&url),
            "Error al cargar los entrenadores",
        )
        .await
    }

    pub async fn list_nutritionists(&self) -> Result<Vec<UserProfile>, ApiError> {
        let url = self.endpoint("/users/nutricionista").await;
        self.send_json(
            self.http_client().get(&url),
            "Error al cargar los nutricionistas",
        )
        .await
    }

    pub async fn create_report(
        &self,
        request: &CreateReportRequest,
    ) -> Result<Option<Report>, ApiError> {
        let url = self.endpoint("/informes").await;
        log::info!(
            "sending report for user {} from {}",
            request.usuario_id,
            request.enviado_por_id
        );
        self.send_created(
            self.http_client().post(&url).json(request),
            "Error al enviar el informe",
        )
        .await
    }

    pub async fn list_reports_for_user(&self, user_id: EntityId) -> Result<Vec<Report>, ApiError> {
        let url = self.endpoint(&format!("/informes/usuario/{}", user_id)).await;
        self.send_json(
            self.http_client().get(&url),
            "No se pudo cargar la información del informe",
        )
        .await
    }
}
