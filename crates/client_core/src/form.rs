//! Form state controller: the only owner of the draft and the submission lifecycle.

use shared::{
    domain::{Draft, FieldUpdate},
    error::DraftValidationError,
    protocol::{OutboundRequest, Outcome},
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::gateway::SubmissionGateway;

pub const SUBMIT_LABEL: &str = "Send Email";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        message: String,
        task_id: String,
    },
    Failed {
        message: String,
    },
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded { .. } | SubmissionState::Failed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("no submission is in flight")]
    NoSubmissionInFlight,
    #[error(transparent)]
    Invalid(#[from] DraftValidationError),
}

#[derive(Debug, Default)]
pub struct FormController {
    draft: Draft,
    state: SubmissionState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_editable(&self) -> bool {
        self.state != SubmissionState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editable() {
            SUBMIT_LABEL
        } else {
            SUBMITTING_LABEL
        }
    }

    pub fn status_line(&self) -> Option<StatusLine> {
        match &self.state {
            SubmissionState::Idle | SubmissionState::Submitting => None,
            SubmissionState::Succeeded { message, task_id } => Some(StatusLine {
                text: format!("Success: {message} (Task ID: {task_id})"),
                is_error: false,
            }),
            SubmissionState::Failed { message } => Some(StatusLine {
                text: message.clone(),
                is_error: true,
            }),
        }
    }

    /// Rejected while a submission is in flight. An accepted edit after a
    /// terminal result returns the form to `Idle`.
    pub fn update_field(&mut self, update: FieldUpdate) -> Result<(), FormError> {
        if !self.is_editable() {
            debug!(
                field = update.field_name(),
                "ignoring edit while submission is in flight"
            );
            return Err(FormError::SubmissionInFlight);
        }

        self.draft.apply(update);
        if self.state.is_terminal() {
            self.state = SubmissionState::Idle;
        }
        Ok(())
    }

    /// Validates the draft, enters `Submitting`, and returns the snapshot to send.
    /// On error the state is left untouched.
    pub fn begin_submit(&mut self) -> Result<OutboundRequest, FormError> {
        if !self.is_editable() {
            return Err(FormError::SubmissionInFlight);
        }
        self.draft.validate()?;

        self.state = SubmissionState::Submitting;
        Ok(self.draft.to_request())
    }

    pub fn complete_submit(&mut self, outcome: Outcome) -> Result<&SubmissionState, FormError> {
        if self.is_editable() {
            return Err(FormError::NoSubmissionInFlight);
        }

        self.state = match outcome {
            Ok(receipt) => {
                info!(task_id = %receipt.task_id, "submission succeeded; clearing draft");
                self.draft = Draft::default();
                SubmissionState::Succeeded {
                    message: receipt.message,
                    task_id: receipt.task_id,
                }
            }
            Err(failure) => {
                warn!(
                    detail = failure.detail_message(),
                    "submission failed; keeping draft for retry"
                );
                SubmissionState::Failed {
                    message: failure.to_string(),
                }
            }
        };
        Ok(&self.state)
    }

    /// Runs one full submission through `gateway`, exactly one call per invocation.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<&SubmissionState, FormError>
    where
        G: SubmissionGateway + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = gateway.send(request).await;
        self.complete_submit(outcome)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
