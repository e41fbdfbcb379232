//! Runtime configuration loading.
//!
//! Precedence, lowest first: built-in defaults, the `WELLSPRING_API_URL`
//! value baked in at compile time, the same variable at run time. Callers
//! (the CLI) apply their own overrides on top.

use std::env;
use std::path::PathBuf;

use wellspring_domain::{ClientConfig, DomainError};

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "WELLSPRING_API_URL";

/// Environment variable overriding the token storage file.
pub const STORAGE_PATH_ENV: &str = "WELLSPRING_STORAGE_PATH";

const APP_DIR: &str = "wellspring";
const STORAGE_FILE: &str = "storage.json";

/// Errors raised while assembling configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The resolved configuration failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] DomainError),

    /// No platform data directory and no explicit storage path.
    #[error("could not determine a data directory; set {STORAGE_PATH_ENV}")]
    NoDataDir,
}

/// Builds the client configuration from defaults and the environment.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if the resolved base URL is not http(s).
pub fn load_client_config() -> Result<ClientConfig, ConfigError> {
    let runtime = env::var(API_URL_ENV).ok();
    resolve_client_config(option_env!("WELLSPRING_API_URL"), runtime.as_deref())
}

/// Combines the compile-time and run-time base URL candidates.
///
/// Blank values are ignored so an exported-but-empty variable falls through.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if the chosen base URL is not http(s).
pub fn resolve_client_config(
    compiled: Option<&str>,
    runtime: Option<&str>,
) -> Result<ClientConfig, ConfigError> {
    let base_url = [runtime, compiled]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or_default();

    let config = ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Location of the token storage file.
///
/// # Errors
///
/// Returns `ConfigError::NoDataDir` when neither the override nor a
/// platform data directory is available.
pub fn storage_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = env::var(STORAGE_PATH_ENV)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }
    default_storage_path().ok_or(ConfigError::NoDataDir)
}

/// `<data dir>/wellspring/storage.json`, if the platform has a data dir.
#[must_use]
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(STORAGE_FILE))
}
