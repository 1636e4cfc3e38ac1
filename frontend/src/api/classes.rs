use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, DirectedClass, EntityId, Reservation},
};
use crate::utils::time::format_date;

impl ApiClient {
    /// All classes, or only those held on `day`.
    pub async fn list_classes(&self, day: Option<NaiveDate>) -> Result<Vec<DirectedClass>, ApiError> {
        let url = self.endpoint("/clasesDirigidas").await;
        let mut request = self.http_client().get(&url);
        if let Some(day) = day {
            request = request.query(&[("dia", format_date(day))]);
        }
        self.send_json(request, "Error al cargar las clases").await
    }

    pub async fn list_reservations(&self, user_id: EntityId) -> Result<Vec<Reservation>, ApiError> {
        let url = self.endpoint("/reservas").await;
        self.send_json(
            self.http_client()
                .get(&url)
                .query(&[("usuarioId", user_id)]),
            "Error al cargar reservas del usuario",
        )
        .await
    }

    pub async fn create_reservation(
        &self,
        user_id: EntityId,
        class_id: EntityId,
    ) -> Result<Option<Reservation>, ApiError> {
        let url = self.endpoint("/reservas").await;
        log::info!("reserving class {} for user {}", class_id, user_id);
        self.send_created(
            self.http_client()
                .post(&url)
                .query(&[("usuarioId", user_id), ("claseDirigidaId", class_id)]),
            "No se pudo realizar la reserva. Por favor, intente nuevamente.",
        )
        .await
    }
}
