use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "mailer.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub service_url: String,
    pub message_path: String,
    /// Zero disables the request timeout.
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:5001".into(),
            message_path: "/message".into(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    service_url: Option<String>,
    message_path: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl ClientSettings {
    pub fn endpoint_url(&self) -> String {
        join_url(&self.service_url, &self.message_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.service_url, "/")
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

/// Defaults, then `mailer.toml` in the working directory, then environment overrides.
pub fn load_settings() -> anyhow::Result<ClientSettings> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.service_url {
            settings.service_url = v;
        }
        if let Some(v) = file_cfg.message_path {
            settings.message_path = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout_secs = v;
        }
    }

    if let Some(v) = env("MAILER_SERVICE_URL") {
        settings.service_url = v;
    }
    if let Some(v) = env("APP__SERVICE_URL") {
        settings.service_url = v;
    }

    if let Some(v) = env("MAILER_MESSAGE_PATH") {
        settings.message_path = v;
    }
    if let Some(v) = env("APP__MESSAGE_PATH") {
        settings.message_path = v;
    }

    for key in ["MAILER_TIMEOUT_SECS", "APP__REQUEST_TIMEOUT_SECS"] {
        if let Some(v) = env(key) {
            settings.request_timeout_secs = v
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a whole number of seconds, got '{v}'"))?;
        }
    }

    Ok(settings)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
