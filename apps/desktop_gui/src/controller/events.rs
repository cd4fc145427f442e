//! Backend-to-UI events and error modeling for the desktop form.

use shared::protocol::{HealthStatus, Outcome};

pub enum UiEvent {
    HealthChecked(HealthStatus),
    SubmissionResolved(Outcome),
    Error(UiError),
}

impl UiEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::HealthChecked(_) => "health_checked",
            UiEvent::SubmissionResolved(_) => "submission_resolved",
            UiEvent::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    HealthCheck,
    Submit,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
            || message_lower.contains("required")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timed out")
            || message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("failed to reach")
            || message_lower.contains("network")
            || message_lower.contains("disconnect")
            || message_lower.contains("queue is full")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line banner text for the service status area.
    pub fn banner(&self) -> String {
        match (self.context, self.category) {
            (UiErrorContext::HealthCheck, UiErrorCategory::Transport) => {
                "Mail service unreachable; is the backend running?".to_string()
            }
            (UiErrorContext::BackendStartup, _) => {
                format!("Backend worker failed to start: {}", self.message)
            }
            _ => self.message.clone(),
        }
    }
}
