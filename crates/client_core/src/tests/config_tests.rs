use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(label: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let root = env::temp_dir().join(format!("mailer_client_config_{label}_{suffix}"));
    fs::create_dir_all(&root).expect("temp root");
    let path = root.join("mailer.toml");
    fs::write(&path, contents).expect("write settings");
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_point_at_local_service() {
    let settings = ClientSettings::default();
    assert_eq!(settings.endpoint_url(), "http://localhost:5001/message");
    assert_eq!(settings.health_url(), "http://localhost:5001/");
    assert_eq!(settings.request_timeout(), Some(Duration::from_secs(30)));
}

#[test]
fn missing_file_keeps_defaults() {
    let path = env::temp_dir().join("mailer_client_config_test_missing/mailer.toml");
    let settings = load_settings_from(&path, no_env).expect("load");
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn endpoint_join_uses_exactly_one_slash() {
    let settings = ClientSettings {
        service_url: "http://mail.internal:8080/".into(),
        message_path: "message".into(),
        request_timeout_secs: 0,
    };
    assert_eq!(settings.endpoint_url(), "http://mail.internal:8080/message");
    assert_eq!(settings.request_timeout(), None);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        "file_values",
        "service_url = \"http://10.0.0.5:5001\"\nrequest_timeout_secs = 5\n",
    );
    let settings = load_settings_from(&path, no_env).expect("load");

    assert_eq!(settings.service_url, "http://10.0.0.5:5001");
    assert_eq!(settings.message_path, "/message");
    assert_eq!(settings.request_timeout_secs, 5);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let path = temp_settings_file("env_overrides", "service_url = \"http://from-file:5001\"\n");
    let vars: HashMap<&str, &str> = HashMap::from([
        ("MAILER_SERVICE_URL", "http://from-env:5001"),
        ("APP__SERVICE_URL", "http://from-app-env:5001"),
        ("MAILER_MESSAGE_PATH", "/v2/message"),
        ("MAILER_TIMEOUT_SECS", " 12 "),
    ]);
    let settings =
        load_settings_from(&path, |key| vars.get(key).map(|v| v.to_string())).expect("load");

    assert_eq!(settings.service_url, "http://from-app-env:5001");
    assert_eq!(settings.endpoint_url(), "http://from-app-env:5001/v2/message");
    assert_eq!(settings.request_timeout_secs, 12);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn rejects_non_numeric_timeout() {
    let path = env::temp_dir().join("mailer_client_config_test_missing/mailer.toml");
    let err = load_settings_from(&path, |key| {
        (key == "APP__REQUEST_TIMEOUT_SECS").then(|| "soon".to_string())
    })
    .expect_err("must fail");
    assert!(err.to_string().contains("APP__REQUEST_TIMEOUT_SECS"));
}

#[test]
fn malformed_file_is_reported() {
    let path = temp_settings_file("malformed", "request_timeout_secs = \"thirty\"\n");
    let err = load_settings_from(&path, no_env).expect_err("must fail");
    assert!(err.to_string().contains("failed to parse settings file"));

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}
