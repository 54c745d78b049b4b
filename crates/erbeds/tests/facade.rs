use erbeds::availability::FailureKind;
use erbeds::domain::config::ClientConfig;

#[test]
fn test_availability_is_enabled_by_default() {
    assert!(erbeds::features::is_enabled("availability"));
    assert!(!erbeds::features::is_enabled("licensing"));
}

#[test]
fn test_connect_requires_service_key() {
    let err = erbeds::connect(&ClientConfig::default()).expect_err("no key");
    assert_eq!(err.kind(), FailureKind::Configuration);
}

#[test]
fn test_connect_with_service_key() {
    let mut config = ClientConfig::default();
    config.api.service_key = Some("key".to_owned());

    let client = erbeds::connect(&config).expect("client");
    assert_eq!(client.endpoint(), erbeds::domain::constants::DEFAULT_ENDPOINT);
}
