use thiserror::Error;

pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to send email.";

/// Classified failure of one submission attempt.
///
/// `Display` renders the exact status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionFailure {
    /// The service answered with a non-success status.
    #[error("Error: {message} ({status})")]
    ServerRejected { status: u16, message: String },
    /// The request went out but no reply arrived.
    #[error("Error: No response from server. Is the backend running?")]
    NoResponse { detail: String },
    /// The request could not be built or dispatched.
    #[error("Error: {detail}")]
    RequestSetupFailed { detail: String },
}

impl SubmissionFailure {
    pub fn server_rejected(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
        Self::ServerRejected { status, message }
    }

    pub fn detail_message(&self) -> &str {
        match self {
            SubmissionFailure::ServerRejected { message, .. } => message,
            SubmissionFailure::NoResponse { detail } => detail,
            SubmissionFailure::RequestSetupFailed { detail } => detail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftValidationError {
    #[error("recipient email is required")]
    MissingRecipient,
    #[error("'{0}' is not a valid email address")]
    InvalidRecipient(String),
    #[error("subject is required")]
    MissingSubject,
    #[error("message is required")]
    MissingMessage,
}
