use crate::api::{ApiClient, ApiError, EntityId, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffKind {
    Trainer,
    Nutritionist,
}

impl StaffKind {
    pub fn title(self) -> &'static str {
        match self {
            StaffKind::Trainer => "Selecciona tu entrenador",
            StaffKind::Nutritionist => "Selecciona tu nutricionista",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            StaffKind::Trainer => "No hay entrenadores disponibles en este momento.",
            StaffKind::Nutritionist => "No hay nutricionistas disponibles en este momento.",
        }
    }

    pub fn matches(self, user: &UserProfile) -> bool {
        match self {
            StaffKind::Trainer => user.entrenador,
            StaffKind::Nutritionist => user.nutricionista,
        }
    }

    /// The staff endpoints may return mixed users; only flagged ones are kept.
    pub async fn fetch(self, api: &ApiClient) -> Result<Vec<UserProfile>, ApiError> {
        let users = match self {
            StaffKind::Trainer => api.list_trainers().await?,
            StaffKind::Nutritionist => api.list_nutritionists().await?,
        };
        Ok(filter_staff(users, self))
    }
}

pub fn filter_staff(users: Vec<UserProfile>, kind: StaffKind) -> Vec<UserProfile> {
    users.into_iter().filter(|user| kind.matches(user)).collect()
}

pub fn can_confirm(selected: Option<EntityId>, staff: &[UserProfile]) -> bool {
    selected.is_some_and(|id| staff.iter().any(|user| user.id == id))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn nutritionist_fetch_filters_unflagged_users() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users/nutricionista");
                then.status(200).json_body(json!([
                    { "id": 3, "nombre": "Eva", "apellidos": "Gil", "nutricionista": true },
                    { "id": 4, "nombre": "Leo", "apellidos": "Paz", "nutricionista": false }
                ]));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let staff = StaffKind::Nutritionist.fetch(&api).await.unwrap();
        mock.assert_async().await;
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].full_name(), "Eva Gil");
    }
}
