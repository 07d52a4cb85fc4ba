//! OpenAPI schema definitions for request bodies.
//!
//! Handlers read bodies as loose JSON maps so that any value can be coerced
//! to text. These wrappers document the expected shape without constraining
//! what the handlers accept.

use utoipa::ToSchema;

/// Application form body.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ApplicationRequestSchema {
    #[schema(example = "Ana")]
    nombre: String,
    #[schema(example = "Quispe Rojas")]
    apellidos: String,
    /// Phone number in E.164 form.
    #[schema(example = "+51987654321")]
    cel: String,
    #[schema(example = "Ciencias e Ingeniería")]
    facultad: String,
    #[schema(example = "5to")]
    semestre: String,
    /// Institutional address ending in `@pucp.edu.pe` or `@pucp.pe`.
    #[schema(rename = "correoPUCP", example = "ana@pucp.edu.pe")]
    correo_pucp: String,
    /// Optional; omitted from the stored record when blank.
    linkedin: Option<String>,
    #[schema(rename = "areaInteres", example = "ti")]
    area_interes: String,
    #[schema(rename = "porQue")]
    por_que: String,
}

/// Community contact body. Only `name` is required.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactRequestSchema {
    #[schema(example = "Ana Quispe")]
    name: String,
    #[schema(example = "ana@example.com")]
    email: Option<String>,
    #[schema(example = "+51987654321")]
    phone: Option<String>,
}
