use thiserror::Error;

use super::emailjs::{EmailJsConfig, EmailJsRequest};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Message is required")]
    MissingMessage,
    #[error("Delivery failed: {0}")]
    Delivery(String),
    #[error("Failed to encode request: {0}")]
    Serialize(String),
}

impl ContactError {
    /// Translation key for the status line shown under the form.
    pub fn message_key(&self) -> &'static str {
        match self {
            ContactError::MissingName => "contact.error.name",
            ContactError::MissingEmail => "contact.error.email",
            ContactError::MissingMessage => "contact.error.message",
            ContactError::Delivery(_) | ContactError::Serialize(_) => "contact.error.delivery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    Service,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Phone => &mut self.phone,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Name, email and message must be non-blank.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service: self.service.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// `mailto:` link carrying every field in the subject and body.
    pub fn mailto_link(&self, recipient: &str) -> String {
        let form = self.trimmed();
        let subject = format!("Freight inquiry from {}", form.name);
        let body = format!(
            "Name: {}\nEmail: {}\nCompany: {}\nPhone: {}\nService: {}\n\n{}",
            form.name, form.email, form.company, form.phone, form.service, form.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

/// How a validated submission leaves the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    EmailJs(EmailJsRequest),
    Mailto(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(ContactError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: FormStatus,
}

impl ContactState {
    pub fn update(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Validates and picks a delivery path. Invalid input sets an error status and
    /// returns `None`, so nothing is sent. Either path leaves the form untouched
    /// until the caller reports the handoff with [`ContactState::delivered`] or
    /// [`ContactState::delivery_failed`].
    pub fn submit(&mut self, config: Option<&EmailJsConfig>, recipient: &str) -> Option<Dispatch> {
        if let Err(e) = self.form.validate() {
            self.status = FormStatus::Failed(e);
            return None;
        }
        match config {
            Some(config) => {
                self.status = FormStatus::Sending;
                Some(Dispatch::EmailJs(EmailJsRequest::new(config, &self.form)))
            }
            None => {
                self.status = FormStatus::Sending;
                Some(Dispatch::Mailto(self.form.mailto_link(recipient)))
            }
        }
    }

    pub fn delivered(&mut self) {
        self.form = ContactForm::default();
        self.status = FormStatus::Sent;
    }

    /// Keeps the form populated so the visitor can retry.
    pub fn delivery_failed(&mut self, error: ContactError) {
        self.status = FormStatus::Failed(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.update(ContactField::Name, "Ahmed".into());
        state.update(ContactField::Email, "a@b.com".into());
        state.update(ContactField::Message, "hi".into());
        state
    }

    fn config() -> EmailJsConfig {
        EmailJsConfig::from_parts(Some("svc"), Some("tpl"), Some("key")).unwrap()
    }

    #[test]
    fn blank_name_fails_validation_without_dispatch() {
        let mut state = filled();
        state.update(ContactField::Name, "".into());
        let dispatch = state.submit(Some(&config()), "ops@example.com");
        assert_eq!(dispatch, None);
        assert_eq!(state.status, FormStatus::Failed(ContactError::MissingName));
        assert_eq!(state.form.email, "a@b.com");
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let form = ContactForm {
            name: "x".into(),
            email: "   ".into(),
            message: "hi".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingEmail));
        let form = ContactForm {
            message: "\n\t".into(),
            email: "a@b.com".into(),
            ..form
        };
        assert_eq!(form.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn configured_delivery_succeeds_and_clears_form() {
        let mut state = filled();
        let dispatch = state.submit(Some(&config()), "ops@example.com");
        assert!(matches!(dispatch, Some(Dispatch::EmailJs(_))));
        assert!(state.is_sending());

        state.delivered();
        assert_eq!(state.status, FormStatus::Sent);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn failed_delivery_keeps_form_for_retry() {
        let mut state = filled();
        state.submit(Some(&config()), "ops@example.com");
        state.delivery_failed(ContactError::Delivery("timeout".into()));
        assert_eq!(state.form.name, "Ahmed");
        assert!(matches!(state.status, FormStatus::Failed(ContactError::Delivery(_))));
    }

    #[test]
    fn missing_config_falls_back_to_mailto() {
        let mut state = filled();
        state.update(ContactField::Company, "Acme & Sons".into());
        let dispatch = state.submit(None, "ops@example.com");
        let Some(Dispatch::Mailto(link)) = dispatch else {
            panic!("expected mailto dispatch, got {dispatch:?}");
        };
        assert!(link.starts_with("mailto:ops@example.com?subject=Freight%20inquiry%20from%20Ahmed&body="));
        assert!(link.contains("Company%3A%20Acme%20%26%20Sons"));
        assert!(!link.contains(' '));
        assert!(state.is_sending());
        assert_eq!(state.form.company, "Acme & Sons");

        state.delivered();
        assert_eq!(state.status, FormStatus::Sent);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn failed_mailto_handoff_keeps_form() {
        let mut state = filled();
        let dispatch = state.submit(None, "ops@example.com");
        assert!(matches!(dispatch, Some(Dispatch::Mailto(_))));

        state.delivery_failed(ContactError::Delivery("navigation blocked".into()));
        assert_eq!(state.form.name, "Ahmed");
        assert_eq!(state.form.message, "hi");
        assert_eq!(
            state.status,
            FormStatus::Failed(ContactError::Delivery("navigation blocked".into()))
        );
    }

    #[test]
    fn error_keys_exist_for_every_error() {
        for err in [
            ContactError::MissingName,
            ContactError::MissingEmail,
            ContactError::MissingMessage,
            ContactError::Delivery(String::new()),
        ] {
            let key = err.message_key();
            assert!(crate::i18n::translations::has_key(crate::i18n::Language::En, key));
        }
    }
}
