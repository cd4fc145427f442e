//! Backend commands queued from UI to backend worker.

use shared::protocol::OutboundRequest;

pub enum BackendCommand {
    Submit { request: OutboundRequest },
    CheckHealth,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Submit { .. } => "submit",
            BackendCommand::CheckHealth => "check_health",
        }
    }
}
