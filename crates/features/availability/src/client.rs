use crate::envelope::decode_items;
use crate::error::{AvailabilityError, AvailabilityErrorExt};
use crate::source::BedSource;
use erbeds_domain::config::ApiConfig;
use erbeds_domain::constants::{
    NUM_OF_ROWS, PAGE_NO, PARAM_NUM_OF_ROWS, PARAM_PAGE_NO, PARAM_SERVICE_KEY, PARAM_STAGE1,
    PARAM_STAGE2, PARAM_TYPE, RESPONSE_TYPE_JSON,
};
use erbeds_domain::hospital::HospitalRecord;
use erbeds_kernel::state::selection::Selection;
use std::fmt;
use tracing::{debug, info, warn};

/// HTTP client for the real-time ER bed-availability endpoint.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct BedQueryClient {
    http: reqwest::Client,
    endpoint: String,
    service_key: String,
}

impl fmt::Debug for BedQueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BedQueryClient")
            .field("endpoint", &self.endpoint)
            .field("service_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl BedQueryClient {
    /// Builds a client from the `[api]` configuration section.
    ///
    /// # Errors
    /// Returns [`AvailabilityError::Config`] if the service key or endpoint is blank, and
    /// [`AvailabilityError::Transport`] if the HTTP stack cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, AvailabilityError> {
        let Some(service_key) = config.service_key() else {
            return Err(AvailabilityError::Config {
                message: "service key is not set (ERBEDS_SERVICE_KEY or api.service_key)".into(),
                context: None,
            });
        };

        let endpoint = config.endpoint.trim();
        if endpoint.is_empty() {
            return Err(AvailabilityError::Config {
                message: "endpoint is empty".into(),
                context: None,
            });
        }

        let http = Self::http_builder().build().context("Building HTTP client")?;

        Ok(Self { http, endpoint: endpoint.to_owned(), service_key: service_key.to_owned() })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn http_builder() -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    }

    #[cfg(target_arch = "wasm32")]
    fn http_builder() -> reqwest::ClientBuilder {
        reqwest::Client::builder()
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues one GET for the first page of `selection` and decodes the hospital list.
    ///
    /// Records are returned in upstream order; sorting is up to the caller.
    ///
    /// # Errors
    /// * [`AvailabilityError::Transport`] if the request fails or the body cannot be read.
    /// * [`AvailabilityError::Upstream`] for a non-2xx status or a failing `resultCode`.
    /// * [`AvailabilityError::Decode`] if the body is not the expected JSON envelope.
    pub async fn query(&self, selection: Selection) -> Result<Vec<HospitalRecord>, AvailabilityError> {
        let region = selection.region();
        let district = selection.district();
        debug!(endpoint = %self.endpoint, region, district, "Querying bed availability");

        let page_no = PAGE_NO.to_string();
        let num_of_rows = NUM_OF_ROWS.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                (PARAM_STAGE1, region),
                (PARAM_STAGE2, district),
                (PARAM_PAGE_NO, page_no.as_str()),
                (PARAM_NUM_OF_ROWS, num_of_rows.as_str()),
                (PARAM_SERVICE_KEY, self.service_key.as_str()),
                (PARAM_TYPE, RESPONSE_TYPE_JSON),
            ])
            .send()
            .await
            .context("Sending bed availability request")?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, region, district, "Bed availability request rejected");
            return Err(AvailabilityError::Upstream {
                code: status.as_u16().to_string().into(),
                message: status.canonical_reason().unwrap_or("HTTP error").into(),
                context: None,
            });
        }

        let body = response.bytes().await.context("Reading bed availability response")?;
        let records = decode_items(&body).inspect_err(|e| {
            warn!(kind = e.label(), error = %e, region, district, "Bed availability response rejected");
        })?;

        info!(region, district, count = records.len(), "Bed availability loaded");
        Ok(records)
    }
}

impl BedSource for BedQueryClient {
    async fn fetch(&self, selection: Selection) -> Result<Vec<HospitalRecord>, AvailabilityError> {
        self.query(selection).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erbeds_domain::constants::DEFAULT_ENDPOINT;

    fn api(key: Option<&str>) -> ApiConfig {
        ApiConfig { endpoint: DEFAULT_ENDPOINT.to_owned(), service_key: key.map(str::to_owned) }
    }

    #[test]
    fn missing_key_is_config_error() {
        for key in [None, Some(""), Some("   ")] {
            let err = BedQueryClient::new(&api(key)).expect_err("no key");
            assert!(matches!(err, AvailabilityError::Config { .. }));
        }
    }

    #[test]
    fn blank_endpoint_is_config_error() {
        let config = ApiConfig { endpoint: " ".to_owned(), service_key: Some("k".to_owned()) };
        let err = BedQueryClient::new(&config).expect_err("no endpoint");
        assert!(matches!(err, AvailabilityError::Config { .. }));
    }

    #[test]
    fn debug_redacts_service_key() {
        let client = BedQueryClient::new(&api(Some("very-secret"))).expect("client");
        let printed = format!("{client:?}");
        assert!(!printed.contains("very-secret"));
        assert!(printed.contains(DEFAULT_ENDPOINT));
    }
}
