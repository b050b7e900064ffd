use gloo_net::http::Request;
use serde::Serialize;

use crate::config;

/// Everything the contact form holds while the visitor fills it in.
/// `destinatario` stays local; the backend already knows where to mail.
#[derive(Clone, PartialEq)]
pub struct ContactInquiry {
    pub nombre: String,
    pub correo: String,
    pub tipo_emprendimiento: String,
    pub mensaje: String,
    pub destinatario: &'static str,
}

impl Default for ContactInquiry {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            correo: String::new(),
            tipo_emprendimiento: String::new(),
            mensaje: String::new(),
            destinatario: config::DEFAULT_RECIPIENT,
        }
    }
}

/// Wire shape of a submission: exactly the four user-editable fields,
/// with the camelCase key the backend expects for the category.
#[derive(Serialize)]
pub struct InquiryPayload {
    pub nombre: String,
    pub correo: String,
    #[serde(rename = "tipoEmprendimiento")]
    pub tipo_emprendimiento: String,
    pub mensaje: String,
}

impl From<&ContactInquiry> for InquiryPayload {
    fn from(inquiry: &ContactInquiry) -> Self {
        Self {
            nombre: inquiry.nombre.clone(),
            correo: inquiry.correo.clone(),
            tipo_emprendimiento: inquiry.tipo_emprendimiento.clone(),
            mensaje: inquiry.mensaje.clone(),
        }
    }
}

/// The closed set of categories offered by the form's select control,
/// in rendered order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BusinessCategory {
    EsteticaBelleza,
    VentaProductosInternet,
    RestaurantFoodTruck,
    ServiciosProfesionales,
    EducacionCursos,
    ProduccionArtesanal,
    ServiciosTecnicos,
    TransporteDelivery,
    EventosBanqueteria,
    SaludBienestar,
    ConstruccionComercio,
    Otro,
}

impl BusinessCategory {
    pub const ALL: [BusinessCategory; 12] = [
        BusinessCategory::EsteticaBelleza,
        BusinessCategory::VentaProductosInternet,
        BusinessCategory::RestaurantFoodTruck,
        BusinessCategory::ServiciosProfesionales,
        BusinessCategory::EducacionCursos,
        BusinessCategory::ProduccionArtesanal,
        BusinessCategory::ServiciosTecnicos,
        BusinessCategory::TransporteDelivery,
        BusinessCategory::EventosBanqueteria,
        BusinessCategory::SaludBienestar,
        BusinessCategory::ConstruccionComercio,
        BusinessCategory::Otro,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            BusinessCategory::EsteticaBelleza => "estetica-belleza",
            BusinessCategory::VentaProductosInternet => "venta-productos-internet",
            BusinessCategory::RestaurantFoodTruck => "restaurant-food-truck",
            BusinessCategory::ServiciosProfesionales => "servicios-profesionales",
            BusinessCategory::EducacionCursos => "educacion-cursos",
            BusinessCategory::ProduccionArtesanal => "produccion-artesanal",
            BusinessCategory::ServiciosTecnicos => "servicios-tecnicos",
            BusinessCategory::TransporteDelivery => "transporte-delivery",
            BusinessCategory::EventosBanqueteria => "eventos-banqueteria",
            BusinessCategory::SaludBienestar => "salud-bienestar",
            BusinessCategory::ConstruccionComercio => "construccion-comercio",
            BusinessCategory::Otro => "otro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusinessCategory::EsteticaBelleza => "Estética / Belleza",
            BusinessCategory::VentaProductosInternet => "Venta de productos por internet",
            BusinessCategory::RestaurantFoodTruck => "Restaurant / Food Truck",
            BusinessCategory::ServiciosProfesionales => "Servicios profesionales",
            BusinessCategory::EducacionCursos => "Educación / Cursos",
            BusinessCategory::ProduccionArtesanal => "Producción artesanal",
            BusinessCategory::ServiciosTecnicos => "Servicios técnicos",
            BusinessCategory::TransporteDelivery => "Transporte / Delivery",
            BusinessCategory::EventosBanqueteria => "Eventos / Banquetería",
            BusinessCategory::SaludBienestar => "Salud / Bienestar",
            BusinessCategory::ConstruccionComercio => "Construcción / Comercio presencial",
            BusinessCategory::Otro => "Otro (especificar en el mensaje)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

/// Where the submission stands. At most one request is in flight:
/// the form guards on `is_in_flight` and disables its button.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

impl SubmitState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitError {
    /// The backend answered with a non-2xx status.
    Rejected(u16),
    /// The request never completed.
    Unreachable,
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected(_) => {
                "Hubo un error al enviar el formulario. Intenta nuevamente."
            }
            SubmitError::Unreachable => "No se pudo conectar con el servidor.",
        }
    }
}

pub fn submit_endpoint(base: &str) -> String {
    format!("{}/send", base)
}

/// POSTs one inquiry. The response body is never inspected; a 2xx status
/// is the whole success signal.
pub async fn send_inquiry(base: &str, payload: &InquiryPayload) -> Result<(), SubmitError> {
    let response = Request::post(&submit_endpoint(base))
        .json(payload)
        .unwrap()
        .send()
        .await
        .map_err(|_| SubmitError::Unreachable)?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

pub fn advisor_chat_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::ADVISOR_PHONE,
        urlencoding::encode(config::ADVISOR_GREETING)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_inquiry() -> ContactInquiry {
        ContactInquiry {
            nombre: "Daniela Rojas".to_string(),
            correo: "daniela@ejemplo.cl".to_string(),
            tipo_emprendimiento: "produccion-artesanal".to_string(),
            mensaje: "Quiero formalizar mi taller.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn payload_carries_exactly_the_four_wire_keys() {
        let payload = InquiryPayload::from(&filled_inquiry());
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["nombre"], "Daniela Rojas");
        assert_eq!(object["correo"], "daniela@ejemplo.cl");
        assert_eq!(object["tipoEmprendimiento"], "produccion-artesanal");
        assert_eq!(object["mensaje"], "Quiero formalizar mi taller.");
        assert!(!object.contains_key("destinatario"));
    }

    #[test]
    fn recipient_defaults_to_the_fixed_mailbox() {
        let inquiry = ContactInquiry::default();
        assert_eq!(inquiry.destinatario, config::DEFAULT_RECIPIENT);
        assert!(inquiry.nombre.is_empty());
        assert!(inquiry.tipo_emprendimiento.is_empty());
    }

    #[test]
    fn category_set_is_closed_and_in_rendered_order() {
        assert_eq!(BusinessCategory::ALL.len(), 12);
        assert_eq!(BusinessCategory::ALL[0].code(), "estetica-belleza");
        assert_eq!(BusinessCategory::ALL[11].code(), "otro");

        for category in BusinessCategory::ALL {
            assert_eq!(BusinessCategory::from_code(category.code()), Some(category));
            assert!(!category.label().is_empty());
        }

        assert_eq!(BusinessCategory::from_code("consultoria-espacial"), None);
        assert_eq!(BusinessCategory::from_code(""), None);
    }

    #[test]
    fn endpoint_joins_base_origin_and_send_path() {
        assert_eq!(submit_endpoint("/api"), "/api/send");
        assert_eq!(
            submit_endpoint("https://asesoriasnab.cl"),
            "https://asesoriasnab.cl/send"
        );
    }

    #[test]
    fn advisor_chat_url_has_phone_and_encoded_text() {
        let url = advisor_chat_url();
        assert!(url.starts_with("https://wa.me/+56989164896?text="));

        let text = url.split("text=").nth(1).unwrap();
        assert!(!text.is_empty());
        assert!(!text.contains(' '));
        assert!(!text.contains(','));
        assert!(text.contains("%20"));
    }

    #[test]
    fn only_the_submitting_state_counts_as_in_flight() {
        assert!(SubmitState::Submitting.is_in_flight());
        assert!(!SubmitState::Idle.is_in_flight());
        assert!(!SubmitState::Succeeded.is_in_flight());
        assert!(!SubmitState::Failed(SubmitError::Unreachable).is_in_flight());
        assert!(!SubmitState::Failed(SubmitError::Rejected(500)).is_in_flight());
    }

    #[test]
    fn failure_kinds_map_to_distinct_messages() {
        assert_ne!(
            SubmitError::Rejected(500).user_message(),
            SubmitError::Unreachable.user_message()
        );
    }
}
