use std::{io::Write, process::ExitCode};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{load_settings, ClientSettings, FormController, HttpSubmissionGateway, StatusLine};
use shared::domain::FieldUpdate;
use tracing_subscriber::EnvFilter;

/// Submit one email to the mail service and print the outcome.
#[derive(Parser, Debug)]
#[command(name = "desktop", version)]
struct Args {
    #[arg(long)]
    recipient: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
    /// Ask the service to rewrite the message with AI before sending.
    #[arg(long)]
    enhance: bool,
    #[arg(long, env = "MAILER_SERVICE_URL")]
    service_url: Option<String>,
    /// Request timeout in seconds; 0 waits forever.
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Probe the service before submitting.
    #[arg(long)]
    check_health: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut ClientSettings) {
        if let Some(url) = &self.service_url {
            settings.service_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            settings.request_timeout_secs = secs;
        }
    }

    fn field_updates(&self) -> [FieldUpdate; 4] {
        [
            FieldUpdate::Recipient(self.recipient.clone()),
            FieldUpdate::Subject(self.subject.clone()),
            FieldUpdate::Message(self.message.clone()),
            FieldUpdate::EnhanceContent(self.enhance),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    args.apply_overrides(&mut settings);
    let gateway = HttpSubmissionGateway::new(&settings)?;

    if args.check_health {
        let health = gateway
            .health_check()
            .await
            .context("mail service health check failed")?;
        println!("Service status: {} ({})", health.status, health.message);
    }

    let mut form = FormController::new();
    for update in args.field_updates() {
        form.update_field(update)?;
    }

    form.submit(&gateway).await?;

    let Some(status) = form.status_line() else {
        bail!("submission finished without a status");
    };
    let delivered = report(&status, &mut std::io::stdout(), &mut std::io::stderr())?;
    Ok(if delivered {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Success lines go to `out`, error lines to `err` as-is; returns whether the send succeeded.
fn report(
    status: &StatusLine,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<bool> {
    if status.is_error {
        writeln!(err, "{}", status.text)?;
        Ok(false)
    } else {
        writeln!(out, "{}", status.text)?;
        Ok(true)
    }
}
