use super::utils::regular_clients;
use crate::api::{ApiClient, ApiError, CreateReportRequest, UserProfile};

pub async fn load_clients(api: &ApiClient) -> Result<Vec<UserProfile>, ApiError> {
    let users = api.list_users().await?;
    let clients = regular_clients(users);
    log::debug!("loaded {} clients", clients.len());
    Ok(clients)
}

pub async fn send_report(api: &ApiClient, request: CreateReportRequest) -> Result<(), ApiError> {
    let created = api.create_report(&request).await?;
    match created {
        Some(report) => log::info!(
            "report {} sent to user {} by {}",
            report.id,
            request.usuario_id,
            request.enviado_por_id
        ),
        None => log::info!(
            "report sent to user {} by {}",
            request.usuario_id,
            request.enviado_por_id
        ),
    }
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn load_clients_drops_staff() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(200).json_body(json!([
                    {"id": 1, "nombre": "Ana", "apellidos": "Ruiz", "entrenador": false, "nutricionista": false},
                    {"id": 2, "nombre": "Luis", "apellidos": "Gil", "entrenador": true, "nutricionista": false},
                    {"id": 3, "nombre": "Eva", "apellidos": "Sanz", "entrenador": false, "nutricionista": true}
                ]));
            })
            .await;
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let clients = load_clients(&api).await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].nombre, "Ana");
    }

    #[tokio::test]
    async fn send_report_posts_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/informes").json_body(json!({
                    "usuarioId": 7,
                    "enviadoPorId": 2,
                    "mensaje": "Buen trabajo",
                    "fecha": "2025-04-02",
                    "peso": 71.5,
                    "masaMuscular": 0.0
                }));
                then.status(201).json_body(json!({"id": 40, "mensaje": "Buen trabajo"}));
            })
            .await;
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let request = CreateReportRequest {
            usuario_id: 7,
            enviado_por_id: 2,
            mensaje: "Buen trabajo".into(),
            fecha: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            peso: 71.5,
            masa_muscular: 0.0,
        };
        send_report(&api, request).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_report_surfaces_server_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/informes");
                then.status(400).json_body(json!({"message": "Datos inválidos"}));
            })
            .await;
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let request = CreateReportRequest {
            usuario_id: 7,
            enviado_por_id: 3,
            mensaje: "x".into(),
            fecha: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            peso: 70.0,
            masa_muscular: 30.0,
        };
        assert!(send_report(&api, request).await.is_err());
    }
}
