use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Backend primary keys are numeric.
pub type EntityId = i64;

/// The backend sends `null` for unset flags and enums; treat it as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Dates arrive as `YYYY-MM-DD`, sometimes with a time part appended. Anything
/// unreadable becomes `None` instead of failing the surrounding record.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|text| text.get(..10))
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFlags {
    pub is_trainer: bool,
    pub is_nutritionist: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apellidos: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entrenador: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutricionista: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peso: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altura: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masa_muscular: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_deporte: Option<String>,
}

impl UserProfile {
    pub fn roles(&self) -> RoleFlags {
        RoleFlags {
            is_trainer: self.entrenador,
            is_nutritionist: self.nutricionista,
        }
    }

    pub fn is_staff(&self) -> bool {
        self.entrenador || self.nutricionista
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
            .trim()
            .to_string()
    }
}

/// Body of `POST /users/login`; also the shape persisted under `userData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserProfile,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entrenador: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutricionista: bool,
}

impl LoginResponse {
    pub fn roles(&self) -> RoleFlags {
        let user = self.user.roles();
        RoleFlags {
            is_trainer: self.entrenador || user.is_trainer,
            is_nutritionist: self.nutricionista || user.is_nutritionist,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectedClass {
    pub id: EntityId,
    #[serde(rename = "nombreClaseDirigida", default)]
    pub name: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "dia", default, deserialize_with = "lenient_date")]
    pub day: Option<NaiveDate>,
    #[serde(rename = "hora", default)]
    pub start_time: Option<String>,
    #[serde(rename = "duracion", default)]
    pub duration_minutes: Option<u32>,
}

impl DirectedClass {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Clase sin nombre".to_string())
    }

    pub fn display_description(&self) -> String {
        self.description
            .clone()
            .filter(|desc| !desc.trim().is_empty())
            .unwrap_or_else(|| "Sin descripción".to_string())
    }
}

/// Only a confirmed status is recognised; any other value counts as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ReservationStatus {
    #[default]
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "CONFIRMADO")]
    Confirmed,
}

impl From<String> for ReservationStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CONFIRMADO" | "CONFIRMADA" | "CONFIRMED" => ReservationStatus::Confirmed,
            _ => ReservationStatus::Pending,
        }
    }
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pendiente",
            ReservationStatus::Confirmed => "Confirmada",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: EntityId,
    #[serde(rename = "usuarioId", alias = "userId", default)]
    pub user_id: Option<EntityId>,
    #[serde(rename = "claseDirigida", default)]
    pub class_ref: Option<DirectedClass>,
    #[serde(rename = "estado", alias = "status", default, deserialize_with = "null_as_default")]
    pub status: ReservationStatus,
    #[serde(rename = "fecha", default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "hora", default)]
    pub time: Option<String>,
    #[serde(rename = "ubicacion", alias = "lugar", default)]
    pub location: Option<String>,
}

impl Reservation {
    pub fn class_id(&self) -> Option<EntityId> {
        self.class_ref.as_ref().map(|class| class.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: EntityId,
    #[serde(default)]
    pub usuario: Option<UserProfile>,
    #[serde(default)]
    pub enviado_por: Option<UserProfile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mensaje: String,
    #[serde(default)]
    pub fecha: Option<NaiveDate>,
    #[serde(default)]
    pub peso: Option<f64>,
    #[serde(default)]
    pub masa_muscular: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub usuario_id: EntityId,
    pub enviado_por_id: EntityId,
    pub mensaje: String,
    pub fecha: NaiveDate,
    pub peso: f64,
    pub masa_muscular: f64,
}

/// Sign-up payload for `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub nombre: String,
    pub apellidos: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub poblacion: String,
    pub peso: f64,
    pub masa_muscular: f64,
    pub altura: f64,
    pub tipo_deporte: String,
    pub tipo_pago: String,
    pub dni: String,
    pub username: String,
    pub password: String,
    pub entrenador: bool,
    pub nutricionista: bool,
    pub fecha_alta: NaiveDate,
    pub tipo_trabajador: String,
}

/// Error payloads as the backend sends them; both spellings occur.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn text(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "INVALID_RESPONSE")
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self::with_code(msg, format!("HTTP_{status}"))
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Transport and decoding failures; the action can be retried as-is.
    pub fn is_connectivity(&self) -> bool {
        self.code == "REQUEST_FAILED" || self.code == "INVALID_RESPONSE"
    }
}
