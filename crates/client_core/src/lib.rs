//! Client-side submission workflow for the mail service: the form state
//! controller, the HTTP submission gateway, and client settings.

pub mod config;
pub mod form;
pub mod gateway;

pub use config::{load_settings, ClientSettings};
pub use form::{FormController, FormError, StatusLine, SubmissionState};
pub use gateway::{HttpSubmissionGateway, SubmissionGateway};
