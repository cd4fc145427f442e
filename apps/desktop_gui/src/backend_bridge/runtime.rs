//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{ClientSettings, HttpSubmissionGateway, SubmissionGateway};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let gateway = match HttpSubmissionGateway::new(&settings) {
            Ok(gateway) => gateway,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err:#}"),
                )));
                tracing::error!("failed to build submission gateway: {err:#}");
                return;
            }
        };
        tracing::info!(endpoint = gateway.endpoint_url(), "backend worker ready");

        runtime.block_on(async move {
            // Commands run one at a time, so at most one submission is ever in flight.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Submit { request } => {
                        let outcome = gateway.send(request).await;
                        if !deliver(&ui_tx, UiEvent::SubmissionResolved(outcome)) {
                            break;
                        }
                    }
                    BackendCommand::CheckHealth => {
                        let event = match gateway.health_check().await {
                            Ok(health) => UiEvent::HealthChecked(health),
                            Err(err) => UiEvent::Error(UiError::from_message(
                                UiErrorContext::HealthCheck,
                                format!("{err:#}"),
                            )),
                        };
                        if !deliver(&ui_tx, event) {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}

/// Blocks until the UI takes the event; the UI clears its pending flags only on delivery.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    let kind = event.kind();
    match ui_tx.send(event) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!(event = kind, "ui event queue closed; dropping backend event");
            false
        }
    }
}
