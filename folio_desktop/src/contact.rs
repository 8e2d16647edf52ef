//! Contact form state and delivery.

use iced::widget::text_editor;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Phases of the submit button label cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SendState {
    /// Returns the submit button label for the phase.
    pub fn label(&self) -> &'static str {
        match self {
            SendState::Idle => "Send Message",
            SendState::Sending => "Sending...",
            SendState::Sent => "Message Sent!",
            SendState::Failed => "Failed to Send",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SendState::Sending)
    }
}

/// Editable state of the contact form.
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: text_editor::Content,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: text_editor::Content::new(),
        }
    }
}

impl ContactForm {
    /// True when every field has usable content.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && is_plausible_email(&self.email)
            && !self.message.text().trim().is_empty()
    }

    /// Snapshot of the current fields as the wire payload.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            from_name: self.name.trim().to_string(),
            from_email: self.email.trim().to_string(),
            message: self.message.text().trim_end().to_string(),
        }
    }

    /// Clears every field after a successful send.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message = text_editor::Content::new();
    }
}

/// JSON body posted to the form endpoint. Field names follow the endpoint's
/// expected keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Errors surfaced by a contact form submission.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("could not reach the form endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("form endpoint rejected the message with status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Posts the payload to the form endpoint.
pub async fn send(endpoint: String, payload: ContactPayload) -> Result<(), ContactError> {
    let response = reqwest::Client::new()
        .post(&endpoint)
        .header("accept", "application/json")
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        info!("contact message delivered");
        Ok(())
    } else {
        warn!(status = %status, "contact message rejected");
        Err(ContactError::Rejected(status))
    }
}

fn is_plausible_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
