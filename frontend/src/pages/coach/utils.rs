use chrono::NaiveDate;

use crate::api::{ApiError, CreateReportRequest, EntityId, UserProfile};
use crate::router::Dashboard;

pub const REPORT_SENT_MESSAGE: &str = "Informe enviado correctamente.";
pub const REPORT_FAILED_MESSAGE: &str = "Algo ha ido mal, revise la información enviada.";
pub const CLIENTS_LOAD_ERROR: &str =
    "No se pudieron cargar los clientes. Por favor, intenta de nuevo más tarde.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoachRole {
    Trainer,
    Nutritionist,
}

impl CoachRole {
    pub fn dashboard(self) -> Dashboard {
        match self {
            CoachRole::Trainer => Dashboard::Trainer,
            CoachRole::Nutritionist => Dashboard::Nutritionist,
        }
    }

    pub fn report_title(self) -> &'static str {
        match self {
            CoachRole::Trainer => "Informe de entrenamiento",
            CoachRole::Nutritionist => "Informe nutricional",
        }
    }

    pub fn tracks_muscle_mass(self) -> bool {
        matches!(self, CoachRole::Nutritionist)
    }
}

/// Users with neither staff flag.
pub fn regular_clients(users: Vec<UserProfile>) -> Vec<UserProfile> {
    users.into_iter().filter(|user| !user.is_staff()).collect()
}

/// Case-insensitive substring match on first name or surname; a blank query
/// keeps everyone.
pub fn filter_clients(clients: &[UserProfile], query: &str) -> Vec<UserProfile> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return clients.to_vec();
    }
    clients
        .iter()
        .filter(|client| {
            client.nombre.to_lowercase().contains(&query)
                || client.apellidos.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub weight: String,
    pub muscle_mass: String,
    pub notes: String,
    pub repetitions: String,
    pub sets: String,
    pub heart_rate: String,
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Notes plus any optional training figures, one per line.
fn compose_message(role: CoachRole, draft: &ReportDraft) -> String {
    let mut lines = vec![draft.notes.trim().to_string()];
    if role == CoachRole::Trainer {
        for (label, value, unit) in [
            ("Repeticiones", &draft.repetitions, ""),
            ("Series", &draft.sets, ""),
            ("Frecuencia cardíaca", &draft.heart_rate, " ppm"),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                lines.push(format!("{}: {}{}", label, value, unit));
            }
        }
    }
    lines.join("\n")
}

pub fn build_report(
    role: CoachRole,
    draft: &ReportDraft,
    client_id: EntityId,
    sender_id: EntityId,
    today: NaiveDate,
) -> Result<CreateReportRequest, ApiError> {
    let mut errors = Vec::new();
    let peso = parse_number(&draft.weight);
    if peso.is_none() {
        errors.push("El peso es obligatorio y debe ser un número.");
    }
    let masa_muscular = if role.tracks_muscle_mass() {
        let masa = parse_number(&draft.muscle_mass);
        if masa.is_none() {
            errors.push("La masa muscular es obligatoria y debe ser un número.");
        }
        masa.unwrap_or_default()
    } else {
        0.0
    };
    if draft.notes.trim().is_empty() {
        errors.push("Las notas del informe son obligatorias.");
    }

    if !errors.is_empty() {
        return Err(ApiError::validation("Revisa los datos del informe.")
            .with_details(serde_json::json!({ "errors": errors })));
    }

    Ok(CreateReportRequest {
        usuario_id: client_id,
        enviado_por_id: sender_id,
        mensaje: compose_message(role, draft),
        fecha: today,
        peso: peso.unwrap_or_default(),
        masa_muscular,
    })
}
