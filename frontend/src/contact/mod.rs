//! Contact form state, validation and the two delivery paths (EmailJS or mailto).

pub mod emailjs;
pub mod form;

pub use emailjs::{send_email, EmailJsConfig, EmailJsRequest};
pub use form::{ContactError, ContactField, ContactForm, ContactState, Dispatch, FormStatus};
