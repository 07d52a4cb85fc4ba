//! The long "apply to join" submission.
//!
//! Server side, only presence is enforced: every field except the LinkedIn
//! profile must be non-empty after trimming. The institutional-email suffix
//! and motivation length are form gates (see [`crate::domain::forms`]).

use crate::domain::ValidationError;
use crate::domain::body_fields::{FormBody, field_text, optional_field_text};
use crate::domain::ports::RecordFields;

/// Request body keys.
pub mod keys {
    pub const GIVEN_NAME: &str = "nombre";
    pub const FAMILY_NAME: &str = "apellidos";
    pub const PHONE: &str = "cel";
    pub const FACULTY: &str = "facultad";
    pub const TERM: &str = "semestre";
    pub const INSTITUTIONAL_EMAIL: &str = "correoPUCP";
    pub const LINKEDIN: &str = "linkedin";
    pub const AREA_OF_INTEREST: &str = "areaInteres";
    pub const MOTIVATION: &str = "porQue";
}

/// Upstream column names. Accents are part of the table schema.
pub mod columns {
    pub const GIVEN_NAME: &str = "Nombre";
    pub const FAMILY_NAME: &str = "Apellidos";
    pub const PHONE: &str = "Cel";
    pub const FACULTY: &str = "Facultad";
    pub const TERM: &str = "Semestre";
    pub const INSTITUTIONAL_EMAIL: &str = "Correo PUCP";
    pub const LINKEDIN: &str = "LinkedIn";
    pub const AREA_OF_INTEREST: &str = "Área de interés";
    pub const MOTIVATION: &str = "¿Por qué quieres ser parte de Breakout?";
}

/// Keys that must be non-blank, in form order.
pub const REQUIRED_KEYS: [&str; 8] = [
    keys::GIVEN_NAME,
    keys::FAMILY_NAME,
    keys::PHONE,
    keys::FACULTY,
    keys::TERM,
    keys::INSTITUTIONAL_EMAIL,
    keys::AREA_OF_INTEREST,
    keys::MOTIVATION,
];

/// Accepted institutional email domains.
pub const INSTITUTIONAL_EMAIL_SUFFIXES: [&str; 2] = ["@pucp.edu.pe", "@pucp.pe"];

/// Minimum motivation length, in characters, before the form can submit.
pub const MOTIVATION_MIN_CHARS: usize = 50;

/// Academic terms offered by the form.
pub const ACADEMIC_TERMS: [&str; 14] = [
    "1ro",
    "2do",
    "3ro",
    "4to",
    "5to",
    "6to",
    "7mo",
    "8vo",
    "9no",
    "10mo",
    "11vo",
    "12avo",
    "Egresado",
    "Post grado",
];

/// Whether `email` ends with an institutional domain.
///
/// The check is a plain suffix match on the text as typed.
///
/// # Examples
/// ```
/// use breakout_backend::domain::application::is_institutional_email;
///
/// assert!(is_institutional_email("juan@pucp.edu.pe"));
/// assert!(!is_institutional_email("juan@gmail.com"));
/// ```
pub fn is_institutional_email(email: &str) -> bool {
    INSTITUTIONAL_EMAIL_SUFFIXES
        .iter()
        .any(|suffix| email.ends_with(suffix))
}

/// Whether the motivation text is long enough to submit.
pub fn motivation_meets_minimum(motivation: &str) -> bool {
    motivation.chars().count() >= MOTIVATION_MIN_CHARS
}

/// Team a candidate wants to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaOfInterest {
    Marketing,
    Partnerships,
    Projects,
    InformationTechnology,
    PeopleAndCulture,
    Product,
}

impl AreaOfInterest {
    /// Every area, in form order.
    pub const ALL: [Self; 6] = [
        Self::Marketing,
        Self::Partnerships,
        Self::Projects,
        Self::InformationTechnology,
        Self::PeopleAndCulture,
        Self::Product,
    ];

    /// Text submitted and stored upstream.
    pub const fn value(self) -> &'static str {
        match self {
            Self::Marketing => {
                "Marketing: Apoya en la creación de contenido, diseño de publicaciones y gestión de redes sociales para fortalecer la comunicación y presencia de la organización."
            }
            Self::Partnerships => {
                "Partnerships: Colabora en la búsqueda, desarrollo y mantenimiento de alianzas estratégicas con organizaciones, empresas y comunidades."
            }
            Self::Projects => {
                "Proyectos: Brinda apoyo en la organización de eventos, investigaciones (research) y programas como fellowships, asegurando una ejecución efectiva."
            }
            Self::InformationTechnology => {
                "TI (Tecnologías de la Información): Se encarga de gestionar formularios, mantener plataformas digitales y desarrollar herramientas o sitios web."
            }
            Self::PeopleAndCulture => "People & Culture",
            Self::Product => "Producto",
        }
    }

    /// Short option label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marketing => "Marketing",
            Self::Partnerships => "Partnerships",
            Self::Projects => "Proyectos",
            Self::InformationTechnology => "TI (Tecnologías de la Información)",
            Self::PeopleAndCulture => "People & Culture",
            Self::Product => "Producto",
        }
    }

    /// Longer description shown once the area is selected.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Marketing => {
                "Apoya en la creación de contenido, diseño de publicaciones y gestión de redes sociales para fortalecer la comunicación y presencia de la organización"
            }
            Self::Partnerships => {
                "Colabora en la búsqueda, desarrollo y mantenimiento de alianzas estratégicas con organizaciones, empresas y comunidades"
            }
            Self::Projects => {
                "Brinda apoyo en la organización de eventos, investigaciones (research) y programas como fellowships, asegurando una ejecución efectiva"
            }
            Self::InformationTechnology => {
                "Se encarga de gestionar formularios, mantener plataformas digitales y desarrollar herramientas o sitios web"
            }
            Self::PeopleAndCulture => {
                "Fortalece la cultura Breakout, impulsa la integración del equipo y asegura que cada miembro viva una experiencia formativa, colaborativa y motivadora dentro de la comunidad"
            }
            Self::Product => {
                "Investiga el ecosistema de innovación y emprendimiento en la PUCP, transforma datos en estrategias y genera oportunidades para potenciar el impacto y crecimiento de Breakout"
            }
        }
    }

    /// Look an area up by its stored value.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.value() == value)
    }
}

/// A validated application, ready to be written upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSubmission {
    given_name: String,
    family_name: String,
    phone: String,
    faculty: String,
    term: String,
    institutional_email: String,
    linkedin: Option<String>,
    area_of_interest: String,
    motivation: String,
}

impl ApplicationSubmission {
    /// Read and presence-check a request body.
    ///
    /// Values are free text: term and area are stored as sent, the phone is
    /// expected to be normalized already.
    pub fn from_body(body: &FormBody) -> Result<Self, ValidationError> {
        let missing: Vec<&'static str> = REQUIRED_KEYS
            .into_iter()
            .filter(|key| field_text(body, key).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingApplicationFields { fields: missing });
        }

        Ok(Self {
            given_name: field_text(body, keys::GIVEN_NAME),
            family_name: field_text(body, keys::FAMILY_NAME),
            phone: field_text(body, keys::PHONE),
            faculty: field_text(body, keys::FACULTY),
            term: field_text(body, keys::TERM),
            institutional_email: field_text(body, keys::INSTITUTIONAL_EMAIL),
            linkedin: optional_field_text(body, keys::LINKEDIN),
            area_of_interest: field_text(body, keys::AREA_OF_INTEREST),
            motivation: field_text(body, keys::MOTIVATION),
        })
    }

    /// Upstream columns for this application; LinkedIn only when present.
    pub fn to_record_fields(&self) -> RecordFields {
        let mut fields = RecordFields::new();
        fields.insert(columns::GIVEN_NAME, self.given_name.as_str());
        fields.insert(columns::FAMILY_NAME, self.family_name.as_str());
        fields.insert(columns::PHONE, self.phone.as_str());
        fields.insert(columns::FACULTY, self.faculty.as_str());
        fields.insert(columns::TERM, self.term.as_str());
        fields.insert(columns::INSTITUTIONAL_EMAIL, self.institutional_email.as_str());
        fields.insert_present(columns::LINKEDIN, self.linkedin.clone());
        fields.insert(columns::AREA_OF_INTEREST, self.area_of_interest.as_str());
        fields.insert(columns::MOTIVATION, self.motivation.as_str());
        fields
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn faculty(&self) -> &str {
        &self.faculty
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn area_of_interest(&self) -> &str {
        &self.area_of_interest
    }

    pub fn has_linkedin(&self) -> bool {
        self.linkedin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    use crate::domain::body_fields::into_form_body;

    #[fixture]
    fn complete_body() -> FormBody {
        into_form_body(json!({
            "nombre": "Juan",
            "apellidos": "Pérez",
            "cel": "+51987654321",
            "facultad": "Ciencias e Ingeniería",
            "semestre": "5to",
            "correoPUCP": "juan@pucp.edu.pe",
            "linkedin": "",
            "areaInteres": "Producto",
            "porQue": "Quiero construir productos con impacto en la comunidad PUCP."
        }))
    }

    #[rstest]
    fn empty_linkedin_is_omitted_from_columns(complete_body: FormBody) {
        let submission = ApplicationSubmission::from_body(&complete_body).expect("valid body");
        let fields = submission.to_record_fields();
        assert!(!fields.contains(columns::LINKEDIN));
        assert_eq!(fields.len(), 8);
        assert_eq!(fields.get(columns::AREA_OF_INTEREST), Some("Producto"));
        assert_eq!(fields.get(columns::PHONE), Some("+51987654321"));
    }

    #[rstest]
    fn present_linkedin_is_trimmed_and_kept(mut complete_body: FormBody) {
        complete_body.insert(
            keys::LINKEDIN.to_owned(),
            Value::from("  https://linkedin.com/in/juan "),
        );
        let fields = ApplicationSubmission::from_body(&complete_body)
            .expect("valid body")
            .to_record_fields();
        assert_eq!(fields.get(columns::LINKEDIN), Some("https://linkedin.com/in/juan"));
    }

    #[rstest]
    fn each_required_key_is_enforced(complete_body: FormBody) {
        for key in REQUIRED_KEYS {
            for blank in [Value::Null, Value::from("   ")] {
                let mut body = complete_body.clone();
                body.insert(key.to_owned(), blank);
                let err = ApplicationSubmission::from_body(&body).expect_err("must fail");
                assert_eq!(
                    err,
                    ValidationError::MissingApplicationFields { fields: vec![key] }
                );
            }
            let mut body = complete_body.clone();
            body.remove(key);
            assert!(ApplicationSubmission::from_body(&body).is_err(), "{key} removed");
        }
    }

    #[rstest]
    fn values_are_trimmed(mut complete_body: FormBody) {
        complete_body.insert(keys::GIVEN_NAME.to_owned(), Value::from("  Juan  "));
        let submission = ApplicationSubmission::from_body(&complete_body).expect("valid body");
        assert_eq!(submission.given_name(), "Juan");
    }

    #[rstest]
    #[case("juan@pucp.edu.pe", true)]
    #[case("juan@pucp.pe", true)]
    #[case("juan@gmail.com", false)]
    #[case("juan@pucp.edu.pe ", false)]
    #[case("", false)]
    fn institutional_suffixes(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_institutional_email(email), expected);
    }

    #[rstest]
    fn motivation_threshold_counts_characters() {
        assert!(!motivation_meets_minimum(&"a".repeat(49)));
        assert!(motivation_meets_minimum(&"ñ".repeat(50)));
    }

    #[rstest]
    fn areas_round_trip_through_stored_values() {
        for area in AreaOfInterest::ALL {
            assert_eq!(AreaOfInterest::from_value(area.value()), Some(area));
            assert!(!area.description().is_empty());
        }
        assert_eq!(AreaOfInterest::from_value("Ventas"), None);
    }
}
