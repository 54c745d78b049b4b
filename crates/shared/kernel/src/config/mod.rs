use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file stem, resolved against the working directory (`erbeds.toml`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "erbeds";
/// Prefix of environment overrides, e.g. `ERBEDS__API__SERVICE_KEY`.
pub const ENV_PREFIX: &str = "ERBEDS";

/// Custom error type for config loading.
#[erbeds_derive::erbeds_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered under environment overrides.
///
/// 1. **File**: an explicit `path` must exist; without one, `erbeds.{toml,json,yaml,...}` in
///    the working directory is used when present and skipped otherwise.
/// 2. **Environment**: variables prefixed with `ERBEDS__`, nested with `__`
///    (`ERBEDS__API__SERVICE_KEY` maps to `api.service_key`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed, or
/// the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use erbeds_kernel::config::load_config;
/// use erbeds_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(!cfg.api.endpoint.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
