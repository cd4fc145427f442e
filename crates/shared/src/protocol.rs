use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SubmissionFailure;

/// Body of `POST /message`, a snapshot of the draft at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundRequest {
    #[serde(rename = "destinataire")]
    pub recipient: String,
    #[serde(rename = "sujet")]
    pub subject: String,
    pub message: String,
    pub enhance_content: bool,
}

/// Fields of a non-success reply, read one at a time so a mistyped
/// field never hides the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceErrorBody {
    pub message: Option<String>,
    pub error_details: Option<String>,
}

impl ServiceErrorBody {
    pub fn from_value(body: &Value) -> Self {
        Self {
            message: str_field(body, "message"),
            error_details: str_field(body, "error_details"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub message: String,
    pub task_id: String,
}

impl SendReceipt {
    /// Reads `message` and `task_id` from a success body (`202 Accepted` once
    /// the send task is queued). Absent or non-string fields become empty.
    pub fn from_value(body: &Value) -> Self {
        Self {
            message: str_field(body, "message").unwrap_or_default(),
            task_id: str_field(body, "task_id").unwrap_or_default(),
        }
    }
}

fn str_field(body: &Value, field: &str) -> Option<String> {
    body.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Normalized result of one submission attempt.
pub type Outcome = Result<SendReceipt, SubmissionFailure>;

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
