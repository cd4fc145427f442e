//! UI layer for the desktop mailer form.

pub mod app;

pub use app::MailerApp;
