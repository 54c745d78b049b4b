use erbeds::domain::config::ClientConfig;

/// Configuration baked in at build time.
///
/// The browser has no environment or file system, so the service key is read from
/// `ERBEDS_SERVICE_KEY` when the crate is compiled. `ERBEDS_ENDPOINT` optionally overrides the
/// upstream URL.
#[must_use]
pub fn build_config() -> ClientConfig {
    config_from(option_env!("ERBEDS_SERVICE_KEY"), option_env!("ERBEDS_ENDPOINT"))
}

fn config_from(service_key: Option<&str>, endpoint: Option<&str>) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.api.service_key = service_key.map(str::to_owned);
    if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
        config.api.endpoint = endpoint.to_owned();
    }
    config
}
