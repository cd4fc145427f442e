mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::MailerApp;

#[derive(Parser, Debug)]
#[command(name = "desktop_gui", version)]
struct Args {
    /// Base URL of the mail service; overrides mailer.toml and the environment.
    #[arg(long)]
    service_url: Option<String>,
    /// Request timeout in seconds; 0 waits forever.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(url) = args.service_url {
        settings.service_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        settings.request_timeout_secs = secs;
    }
    tracing::info!(endpoint = %settings.endpoint_url(), "starting mailer desktop form");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mailer")
            .with_inner_size([560.0, 520.0])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mailer",
        options,
        Box::new(|_cc| Ok(Box::new(MailerApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop form exited with an error: {err}"))
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::protocol::OutboundRequest;

    use super::controller::{
        events::{UiError, UiErrorCategory, UiErrorContext},
        orchestration::dispatch_backend_command,
    };
    use super::BackendCommand;

    fn sample_request() -> OutboundRequest {
        OutboundRequest {
            recipient: "a@b.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            enhance_content: false,
        }
    }

    #[test]
    fn classifies_backend_command_processor_disconnect_as_transport_error() {
        let err = UiError::from_message(
            UiErrorContext::Submit,
            "Backend command processor disconnected (possible startup/runtime failure)",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn unreachable_health_check_gets_backend_hint() {
        let err = UiError::from_message(
            UiErrorContext::HealthCheck,
            "failed to reach mail service at http://localhost:5001/: error sending request",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(
            err.banner(),
            "Mail service unreachable; is the backend running?"
        );
    }

    #[test]
    fn malformed_health_body_is_validation_error() {
        let err = UiError::from_message(
            UiErrorContext::HealthCheck,
            "mail service returned a malformed health response",
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err.context(), UiErrorContext::HealthCheck);
    }

    #[test]
    fn dispatch_queues_submit_command() {
        let (cmd_tx, cmd_rx) = bounded(1);
        dispatch_backend_command(
            &cmd_tx,
            BackendCommand::Submit {
                request: sample_request(),
            },
        )
        .expect("queued");

        match cmd_rx.try_recv().expect("command") {
            BackendCommand::Submit { request } => assert_eq!(request, sample_request()),
            BackendCommand::CheckHealth => panic!("unexpected health check"),
        }
    }

    #[test]
    fn dispatch_reports_full_queue() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        dispatch_backend_command(&cmd_tx, BackendCommand::CheckHealth).expect("first fits");

        let err = dispatch_backend_command(&cmd_tx, BackendCommand::CheckHealth)
            .expect_err("queue full");
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert!(err.message().contains("queue is full"));
    }

    #[test]
    fn dispatch_reports_disconnected_backend() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);

        let err = dispatch_backend_command(
            &cmd_tx,
            BackendCommand::Submit {
                request: sample_request(),
            },
        )
        .expect_err("disconnected");
        assert_eq!(err.context(), UiErrorContext::Submit);
        assert!(err.message().contains("disconnected"));
    }
}
