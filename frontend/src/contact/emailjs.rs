use gloo_net::http::Request;
use serde::Serialize;

use super::form::{ContactError, ContactForm};
use crate::config;

/// The three values EmailJS needs. Missing any of them means mailto fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        Some(Self {
            service_id: non_empty(service_id)?,
            template_id: non_empty(template_id)?,
            public_key: non_empty(public_key)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailJsRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailJsRequest {
    pub fn new(config: &EmailJsConfig, form: &ContactForm) -> Self {
        let form = form.trimmed();
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: form.name,
                from_email: form.email,
                company: form.company,
                phone: form.phone,
                service: form.service,
                message: form.message,
            },
        }
    }
}

pub async fn send_email(request: &EmailJsRequest) -> Result<(), ContactError> {
    let response = Request::post(config::EMAILJS_API_URL)
        .json(request)
        .map_err(|e| ContactError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Delivery(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ContactError::Delivery(format!("EmailJS returned {}: {}", status, body)));
    }
    Ok(())
}
