//! Build-time configuration, read from the environment when `trunk build` runs.

use crate::contact::EmailJsConfig;

/// localStorage key holding the language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const DEFAULT_CONTACT_EMAIL: &str = "info@meridianfreight.com";

/// EmailJS credentials, only when all three are set and non-empty.
pub fn email_delivery_config() -> Option<EmailJsConfig> {
    EmailJsConfig::from_parts(
        option_env!("EMAILJS_SERVICE_ID"),
        option_env!("EMAILJS_TEMPLATE_ID"),
        option_env!("EMAILJS_PUBLIC_KEY"),
    )
}

/// Recipient used by the mailto fallback.
pub fn contact_email() -> &'static str {
    match option_env!("CONTACT_EMAIL") {
        Some(email) if !email.trim().is_empty() => email,
        _ => DEFAULT_CONTACT_EMAIL,
    }
}
