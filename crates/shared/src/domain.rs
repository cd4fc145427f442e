use serde::{Deserialize, Serialize};

use crate::{error::DraftValidationError, protocol::OutboundRequest};

/// In-progress form contents, edited one field at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub enhance_content: bool,
}

/// A single typed edit to one [`Draft`] field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Recipient(String),
    Subject(String),
    Message(String),
    EnhanceContent(bool),
}

impl FieldUpdate {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Recipient(_) => "recipient",
            FieldUpdate::Subject(_) => "subject",
            FieldUpdate::Message(_) => "message",
            FieldUpdate::EnhanceContent(_) => "enhance_content",
        }
    }
}

impl Draft {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Recipient(value) => self.recipient = value,
            FieldUpdate::Subject(value) => self.subject = value,
            FieldUpdate::Message(value) => self.message = value,
            FieldUpdate::EnhanceContent(value) => self.enhance_content = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Required-field and address-shape checks applied before dispatch.
    ///
    /// Reports the first problem in form order (recipient, subject, message).
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() {
            return Err(DraftValidationError::MissingRecipient);
        }
        if !is_email_shaped(recipient) {
            return Err(DraftValidationError::InvalidRecipient(recipient.to_string()));
        }
        if self.subject.trim().is_empty() {
            return Err(DraftValidationError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(DraftValidationError::MissingMessage);
        }
        Ok(())
    }

    pub fn to_request(&self) -> OutboundRequest {
        OutboundRequest {
            recipient: self.recipient.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            enhance_content: self.enhance_content,
        }
    }
}

/// Loose `local@domain` check in the spirit of an HTML `type=email` input.
pub fn is_email_shaped(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
