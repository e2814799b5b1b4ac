use std::path::PathBuf;
use std::time::Duration;

use trackit_api::{ApiError, ApiResult};

pub const STORAGE_DIR_VAR: &str = "TRACKIT_STORAGE_DIR";
pub const SESSION_KEY_VAR: &str = "TRACKIT_SESSION_KEY";
pub const SIMULATED_LATENCY_VAR: &str = "TRACKIT_SIMULATED_LATENCY_MS";

/// Key the signed-in user is persisted under unless overridden.
pub const DEFAULT_SESSION_KEY: &str = "trackitUser";

/// Runtime settings for the local services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackItConfig {
    /// Directory holding the persisted session file
    pub storage_dir: PathBuf,
    pub session_key: String,
    /// Artificial delay applied to login, standing in for a network round trip
    pub simulated_latency: Duration,
}

impl Default for TrackItConfig {
    fn default() -> Self {
        Self {
            storage_dir: std::env::temp_dir().join("trackit"),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            simulated_latency: Duration::ZERO,
        }
    }
}

impl TrackItConfig {
    /// Reads the configuration from the environment, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> ApiResult<Self> {
        let defaults = Self::default();

        let storage_dir = std::env::var(STORAGE_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_dir);

        let session_key = match std::env::var(SESSION_KEY_VAR) {
            Ok(key) if key.trim().is_empty() => {
                return Err(ApiError::ConfigError(format!("{SESSION_KEY_VAR} must not be empty")));
            }
            Ok(key) => key,
            Err(_) => defaults.session_key,
        };

        let simulated_latency = match std::env::var(SIMULATED_LATENCY_VAR) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| ApiError::ConfigError(format!("{SIMULATED_LATENCY_VAR}={raw}: {e}")))?,
            Err(_) => defaults.simulated_latency,
        };

        Ok(Self {
            storage_dir,
            session_key,
            simulated_latency,
        })
    }
}
