use erbeds_domain::config::{ApiConfig, ClientConfig, LogConfig};
use erbeds_domain::constants::DEFAULT_ENDPOINT;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let api = ApiConfig::default();
    assert_eq!(api.endpoint, DEFAULT_ENDPOINT);
    assert!(api.service_key().is_none());

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.path.is_none());
    assert!(!log.json);
}

#[test]
fn client_config_deserializes() {
    let raw = json!({
        "api": { "endpoint": "http://127.0.0.1:9000/beds", "service_key": "abc123" },
        "log": { "level": "debug", "path": "/tmp/erbeds" }
    });

    let cfg: ClientConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.api.endpoint, "http://127.0.0.1:9000/beds");
    assert_eq!(cfg.api.service_key(), Some("abc123"));
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.log.path, Some(std::path::PathBuf::from("/tmp/erbeds")));
}

#[test]
fn blank_service_key_counts_as_missing() {
    let mut cfg = ClientConfig::default();
    cfg.api.service_key = Some("   ".to_owned());
    assert!(cfg.api.service_key().is_none());
}

#[test]
fn debug_output_redacts_service_key() {
    let api = ApiConfig { service_key: Some("super-secret".to_owned()), ..ApiConfig::default() };
    let printed = format!("{api:?}");
    assert!(!printed.contains("super-secret"));
    assert!(printed.contains("<redacted>"));
}
