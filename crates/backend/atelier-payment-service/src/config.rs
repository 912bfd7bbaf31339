use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_API_BASE_URL: &str = "https://api.razorpay.com/v1";

/// Gateway configuration, read from the environment once at startup and
/// injected into the relay state.
///
/// Missing credentials do not prevent startup: the relay fails closed at
/// call time instead, so the rest of the service keeps running.
#[derive(Debug)]
pub struct PaymentConfig {
    pub key_id: String,
    pub key_secret: SecretString,
    pub api_base_url: String,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        let key_id = std::env::var("RZP_KEY_ID").unwrap_or_default();
        let key_secret = std::env::var("RZP_KEY_SECRET").unwrap_or_default();
        let api_base_url =
            std::env::var("RZP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if key_id.is_empty() != key_secret.is_empty() {
            tracing::warn!(
                "Only one of RZP_KEY_ID / RZP_KEY_SECRET is set; gateway calls will fail until both are"
            );
        }

        Self {
            key_id,
            key_secret: SecretString::from(key_secret),
            api_base_url,
        }
    }

    /// Both gateway credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.expose_secret().is_empty()
    }

    /// The key secret doubles as the signature-verification secret.
    pub fn has_verification_secret(&self) -> bool {
        !self.key_secret.expose_secret().is_empty()
    }
}
