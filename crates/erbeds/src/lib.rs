//! Facade crate for the ER Beds feature slices and shared modules.
//! Re-exports domain/kernel primitives and wires feature slices from configuration.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `erbeds` with the desired feature flags (`availability` is on by default).
//! - Call [`connect`] to obtain a query client from a loaded [`ClientConfig`].

pub use erbeds_domain as domain;
#[cfg(feature = "availability")]
use erbeds_domain::config::ClientConfig;
pub use erbeds_kernel as kernel;

#[cfg(feature = "availability")]
pub use erbeds_availability as availability;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "availability")]
        "availability",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds the bed availability client from the `[api]` section of `config`.
///
/// # Errors
/// Returns [`availability::AvailabilityError::Config`] if no service key is configured.
#[cfg(feature = "availability")]
pub fn connect(
    config: &ClientConfig,
) -> Result<availability::BedQueryClient, availability::AvailabilityError> {
    availability::BedQueryClient::new(&config.api)
}
