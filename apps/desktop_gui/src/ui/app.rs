//! The mail form: four inputs, a submit button, and a status region.

use std::time::Duration;

use client_core::{FormController, FormError, SubmissionState};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::FieldUpdate, error::SubmissionFailure};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiError, UiEvent},
    orchestration::dispatch_backend_command,
};

const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(198, 40, 40);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct MailerApp {
    form: FormController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    service_banner: Option<(String, bool)>,
    validation_error: Option<String>,
    health_pending: bool,
}

impl MailerApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            form: FormController::new(),
            cmd_tx,
            ui_rx,
            service_banner: None,
            validation_error: None,
            health_pending: false,
        };
        app.request_health_check();
        app
    }

    fn request_health_check(&mut self) {
        match dispatch_backend_command(&self.cmd_tx, BackendCommand::CheckHealth) {
            Ok(()) => self.health_pending = true,
            Err(err) => self.show_backend_error(err),
        }
    }

    fn show_backend_error(&mut self, err: UiError) {
        tracing::warn!(
            context = ?err.context(),
            category = ?err.category(),
            "{}",
            err.message()
        );
        self.service_banner = Some((err.banner(), true));
    }

    fn drain_backend_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::HealthChecked(health) => {
                    self.health_pending = false;
                    let text = if health.message.is_empty() {
                        format!("Mail service status: {}", health.status)
                    } else {
                        health.message.clone()
                    };
                    self.service_banner = Some((text, !health.is_ok()));
                }
                UiEvent::SubmissionResolved(outcome) => {
                    if let Err(err) = self.form.complete_submit(outcome) {
                        tracing::warn!("dropping unexpected submission outcome: {err}");
                    }
                }
                UiEvent::Error(err) => {
                    self.health_pending = false;
                    self.show_backend_error(err);
                }
            }
        }
    }

    fn edit(&mut self, update: FieldUpdate) {
        self.validation_error = None;
        if let Err(err) = self.form.update_field(update) {
            tracing::debug!("edit rejected: {err}");
        }
    }

    fn submit(&mut self) {
        let request = match self.form.begin_submit() {
            Ok(request) => request,
            Err(FormError::Invalid(err)) => {
                self.validation_error = Some(err.to_string());
                return;
            }
            Err(err) => {
                tracing::debug!("submit ignored: {err}");
                return;
            }
        };
        self.validation_error = None;

        if let Err(err) = dispatch_backend_command(&self.cmd_tx, BackendCommand::Submit { request })
        {
            let failure = SubmissionFailure::RequestSetupFailed {
                detail: err.message().to_string(),
            };
            if let Err(err) = self.form.complete_submit(Err(failure)) {
                tracing::warn!("failed to settle undispatched submission: {err}");
            }
        }
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        let editable = self.form.is_editable();
        let draft = self.form.draft().clone();

        ui.label("Recipient Email:");
        let mut recipient = draft.recipient;
        if ui
            .add_enabled(
                editable,
                egui::TextEdit::singleline(&mut recipient)
                    .hint_text("name@example.com")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.edit(FieldUpdate::Recipient(recipient));
        }

        ui.add_space(6.0);
        ui.label("Subject:");
        let mut subject = draft.subject;
        if ui
            .add_enabled(
                editable,
                egui::TextEdit::singleline(&mut subject).desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.edit(FieldUpdate::Subject(subject));
        }

        ui.add_space(6.0);
        ui.label("Message:");
        let mut message = draft.message;
        if ui
            .add_enabled(
                editable,
                egui::TextEdit::multiline(&mut message)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.edit(FieldUpdate::Message(message));
        }

        ui.add_space(6.0);
        let mut enhance_content = draft.enhance_content;
        if ui
            .add_enabled(
                editable,
                egui::Checkbox::new(&mut enhance_content, "Enhance Content with AI?"),
            )
            .changed()
        {
            self.edit(FieldUpdate::EnhanceContent(enhance_content));
        }

        if let Some(problem) = &self.validation_error {
            ui.add_space(4.0);
            ui.colored_label(ERROR_COLOR, problem);
        }

        ui.add_space(10.0);
        if ui
            .add_enabled(editable, egui::Button::new(self.form.submit_label()))
            .clicked()
        {
            self.submit();
        }
    }

    fn status_ui(&self, ui: &mut egui::Ui) {
        if let Some(status) = self.form.status_line() {
            ui.add_space(12.0);
            let color = if status.is_error {
                ERROR_COLOR
            } else {
                SUCCESS_COLOR
            };
            ui.colored_label(color, status.text);
        }
    }
}

impl eframe::App for MailerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_backend_events();

        egui::TopBottomPanel::bottom("service_status").show(ctx, |ui| {
            match &self.service_banner {
                Some((text, true)) => {
                    ui.colored_label(ERROR_COLOR, text);
                }
                Some((text, false)) => {
                    ui.label(text);
                }
                None => {
                    ui.weak("Checking mail service...");
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Mailer");
            ui.add_space(8.0);
            self.form_ui(ui);
            self.status_ui(ui);
        });

        if self.form.state() == &SubmissionState::Submitting || self.health_pending {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}
