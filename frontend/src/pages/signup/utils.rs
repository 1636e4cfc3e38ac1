use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::api::NewUser;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const DEFAULT_WORKER_TYPE: &str = "cliente";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignUpField {
    Nombre,
    Apellidos,
    Telefono,
    Email,
    Direccion,
    Poblacion,
    Dni,
    Peso,
    Altura,
    MasaMuscular,
    TipoDeporte,
    TipoPago,
    Username,
    Password,
    ConfirmPassword,
}

impl SignUpField {
    pub const PERSONAL: &'static [SignUpField] = &[
        SignUpField::Nombre,
        SignUpField::Apellidos,
        SignUpField::Telefono,
        SignUpField::Email,
        SignUpField::Direccion,
        SignUpField::Poblacion,
        SignUpField::Dni,
    ];

    pub const PHYSICAL: &'static [SignUpField] = &[
        SignUpField::Peso,
        SignUpField::Altura,
        SignUpField::MasaMuscular,
        SignUpField::TipoDeporte,
        SignUpField::TipoPago,
    ];

    pub const ACCOUNT: &'static [SignUpField] = &[
        SignUpField::Username,
        SignUpField::Password,
        SignUpField::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SignUpField::Nombre => "Nombre",
            SignUpField::Apellidos => "Apellidos",
            SignUpField::Telefono => "Teléfono",
            SignUpField::Email => "Email",
            SignUpField::Direccion => "Dirección",
            SignUpField::Poblacion => "Población",
            SignUpField::Dni => "DNI",
            SignUpField::Peso => "Peso (kg)",
            SignUpField::Altura => "Altura (cm)",
            SignUpField::MasaMuscular => "Masa muscular (kg)",
            SignUpField::TipoDeporte => "Tipo de deporte",
            SignUpField::TipoPago => "Tipo de pago",
            SignUpField::Username => "Nombre de usuario",
            SignUpField::Password => "Contraseña",
            SignUpField::ConfirmPassword => "Confirmar contraseña",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            SignUpField::Email => "email",
            SignUpField::Telefono => "tel",
            SignUpField::Password | SignUpField::ConfirmPassword => "password",
            SignUpField::Peso | SignUpField::Altura | SignUpField::MasaMuscular => "number",
            _ => "text",
        }
    }
}

/// Raw text of the sign-up form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpDraft {
    pub nombre: String,
    pub apellidos: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub poblacion: String,
    pub dni: String,
    pub peso: String,
    pub altura: String,
    pub masa_muscular: String,
    pub tipo_deporte: String,
    pub tipo_pago: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpDraft {
    pub fn value(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::Nombre => &self.nombre,
            SignUpField::Apellidos => &self.apellidos,
            SignUpField::Telefono => &self.telefono,
            SignUpField::Email => &self.email,
            SignUpField::Direccion => &self.direccion,
            SignUpField::Poblacion => &self.poblacion,
            SignUpField::Dni => &self.dni,
            SignUpField::Peso => &self.peso,
            SignUpField::Altura => &self.altura,
            SignUpField::MasaMuscular => &self.masa_muscular,
            SignUpField::TipoDeporte => &self.tipo_deporte,
            SignUpField::TipoPago => &self.tipo_pago,
            SignUpField::Username => &self.username,
            SignUpField::Password => &self.password,
            SignUpField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: SignUpField, value: String) {
        let slot = match field {
            SignUpField::Nombre => &mut self.nombre,
            SignUpField::Apellidos => &mut self.apellidos,
            SignUpField::Telefono => &mut self.telefono,
            SignUpField::Email => &mut self.email,
            SignUpField::Direccion => &mut self.direccion,
            SignUpField::Poblacion => &mut self.poblacion,
            SignUpField::Dni => &mut self.dni,
            SignUpField::Peso => &mut self.peso,
            SignUpField::Altura => &mut self.altura,
            SignUpField::MasaMuscular => &mut self.masa_muscular,
            SignUpField::TipoDeporte => &mut self.tipo_deporte,
            SignUpField::TipoPago => &mut self.tipo_pago,
            SignUpField::Username => &mut self.username,
            SignUpField::Password => &mut self.password,
            SignUpField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

pub type FieldErrors = BTreeMap<SignUpField, &'static str>;

/// Non-blank local part, an `@`, then a domain containing an interior dot.
/// Whitespace anywhere rejects the address.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }
    raw.char_indices().any(|(at, c)| {
        if c != '@' || at == 0 {
            return false;
        }
        let domain = &raw[at + 1..];
        domain
            .char_indices()
            .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
    })
}

pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn require(errors: &mut FieldErrors, field: SignUpField, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

fn required_number(
    errors: &mut FieldErrors,
    field: SignUpField,
    raw: &str,
    missing: &'static str,
) -> f64 {
    if raw.trim().is_empty() {
        errors.insert(field, missing);
        return 0.0;
    }
    parse_number(raw).unwrap_or_else(|| {
        errors.insert(field, "Debe ser un número");
        0.0
    })
}

/// Checks every field and builds the registration payload. All problems are
/// reported at once, keyed by field.
pub fn validate_sign_up(draft: &SignUpDraft, today: NaiveDate) -> Result<NewUser, FieldErrors> {
    let mut errors = FieldErrors::new();

    require(&mut errors, SignUpField::Nombre, &draft.nombre, "Nombre requerido");
    require(&mut errors, SignUpField::Apellidos, &draft.apellidos, "Apellidos requeridos");
    require(&mut errors, SignUpField::Telefono, &draft.telefono, "Teléfono requerido");
    if draft.email.trim().is_empty() {
        errors.insert(SignUpField::Email, "Email requerido");
    } else if !is_valid_email(&draft.email) {
        errors.insert(SignUpField::Email, "Email inválido");
    }
    require(&mut errors, SignUpField::Dni, &draft.dni, "DNI requerido");
    require(
        &mut errors,
        SignUpField::Username,
        &draft.username,
        "Nombre de usuario requerido",
    );

    if draft.password.is_empty() {
        errors.insert(SignUpField::Password, "Contraseña requerida");
    } else if draft.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(SignUpField::Password, "Mínimo 6 caracteres");
    }
    if draft.password != draft.confirm_password {
        errors.insert(SignUpField::ConfirmPassword, "Las contraseñas no coinciden");
    }

    let peso = required_number(&mut errors, SignUpField::Peso, &draft.peso, "Peso requerido");
    let altura = required_number(
        &mut errors,
        SignUpField::Altura,
        &draft.altura,
        "Altura requerida",
    );
    let masa_muscular = if draft.masa_muscular.trim().is_empty() {
        0.0
    } else {
        parse_number(&draft.masa_muscular).unwrap_or_else(|| {
            errors.insert(SignUpField::MasaMuscular, "Debe ser un número");
            0.0
        })
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewUser {
        nombre: draft.nombre.trim().to_string(),
        apellidos: draft.apellidos.trim().to_string(),
        telefono: draft.telefono.trim().to_string(),
        email: draft.email.trim().to_string(),
        direccion: draft.direccion.trim().to_string(),
        poblacion: draft.poblacion.trim().to_string(),
        peso,
        masa_muscular,
        altura,
        tipo_deporte: draft.tipo_deporte.trim().to_string(),
        tipo_pago: draft.tipo_pago.trim().to_string(),
        dni: draft.dni.trim().to_string(),
        username: draft.username.trim().to_string(),
        password: draft.password.clone(),
        entrenador: false,
        nutricionista: false,
        fecha_alta: today,
        tipo_trabajador: DEFAULT_WORKER_TYPE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn complete_draft() -> SignUpDraft {
        SignUpDraft {
            nombre: "Ana".into(),
            apellidos: "Ruiz".into(),
            telefono: "600000000".into(),
            email: "ana@gym.es".into(),
            dni: "12345678Z".into(),
            peso: "62.5".into(),
            altura: "168".into(),
            username: "ana".into(),
            password: "secreto".into(),
            confirm_password: "secreto".into(),
            ..SignUpDraft::default()
        }
    }

    #[test]
    fn complete_draft_builds_client_payload() {
        let user = validate_sign_up(&complete_draft(), today()).unwrap();
        assert_eq!(user.peso, 62.5);
        assert_eq!(user.altura, 168.0);
        assert_eq!(user.masa_muscular, 0.0);
        assert!(!user.entrenador && !user.nutricionista);
        assert_eq!(user.tipo_trabajador, "cliente");
        assert_eq!(user.fecha_alta, today());
        assert_eq!(user.password, "secreto");
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate_sign_up(&SignUpDraft::default(), today()).unwrap_err();
        for field in [
            SignUpField::Nombre,
            SignUpField::Apellidos,
            SignUpField::Telefono,
            SignUpField::Email,
            SignUpField::Dni,
            SignUpField::Username,
            SignUpField::Password,
            SignUpField::Peso,
            SignUpField::Altura,
        ] {
            assert!(errors.contains_key(&field), "missing error for {field:?}");
        }
        assert!(!errors.contains_key(&SignUpField::MasaMuscular));
        assert!(!errors.contains_key(&SignUpField::ConfirmPassword));
    }

    #[test]
    fn password_rules() {
        let mut draft = complete_draft();
        draft.password = "abc".into();
        draft.confirm_password = "abc".into();
        let errors = validate_sign_up(&draft, today()).unwrap_err();
        assert_eq!(errors.get(&SignUpField::Password), Some(&"Mínimo 6 caracteres"));

        let mut draft = complete_draft();
        draft.confirm_password = "otra-cosa".into();
        let errors = validate_sign_up(&draft, today()).unwrap_err();
        assert_eq!(
            errors.get(&SignUpField::ConfirmPassword),
            Some(&"Las contraseñas no coinciden")
        );
    }

    #[test]
    fn numeric_fields_must_parse() {
        let mut draft = complete_draft();
        draft.peso = "sesenta".into();
        draft.masa_muscular = "x".into();
        let errors = validate_sign_up(&draft, today()).unwrap_err();
        assert_eq!(errors.get(&SignUpField::Peso), Some(&"Debe ser un número"));
        assert_eq!(errors.get(&SignUpField::MasaMuscular), Some(&"Debe ser un número"));

        let mut draft = complete_draft();
        draft.masa_muscular = " 30 ".into();
        assert_eq!(validate_sign_up(&draft, today()).unwrap().masa_muscular, 30.0);
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("ana.ruiz@gym.example.es"));
        assert!(!is_valid_email("ana@gym"));
        assert!(!is_valid_email("@gym.es"));
        assert!(!is_valid_email("ana@.es"));
        assert!(!is_valid_email("ana@gym."));
        assert!(!is_valid_email("ana ruiz@gym.es"));

        let mut draft = complete_draft();
        draft.email = "ana-at-gym".into();
        let errors = validate_sign_up(&draft, today()).unwrap_err();
        assert_eq!(errors.get(&SignUpField::Email), Some(&"Email inválido"));
    }

    #[test]
    fn draft_accessors_cover_every_field() {
        let mut draft = SignUpDraft::default();
        for field in SignUpField::PERSONAL
            .iter()
            .chain(SignUpField::PHYSICAL)
            .chain(SignUpField::ACCOUNT)
        {
            draft.set(*field, field.label().to_string());
            assert_eq!(draft.value(*field), field.label());
        }
    }
}
