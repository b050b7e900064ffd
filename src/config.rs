#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "/api"  // Development: the dev server proxies /api to the backend
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "https://asesoriasnab.cl"  // Production: exposed through the domain proxy, no port
}

/// Phone number behind the "habla con un asesor" WhatsApp channel.
pub const ADVISOR_PHONE: &str = "+56989164896";

/// Prefilled greeting for the advisor chat.
pub const ADVISOR_GREETING: &str =
    "Hola, quiero hablar con un asesor sobre los servicios de NAB";

/// Mailbox the backend delivers inquiries to. Held in form state for
/// reference but never part of the wire payload.
pub const DEFAULT_RECIPIENT: &str = "noreply@asesoriasnab.cl";
