//! Client configuration loaded from environment variables.
//!
//! Every variable has a workable default so the crate runs against a
//! local backend with zero setup. Deployments override via the
//! environment or a `.env` file.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the FitLink API
    pub api_url: String,
    /// Base URL of the meal-plan service, which is deployed separately
    pub meals_api_url: String,
    /// Where the bearer token is persisted on disk
    pub token_path: PathBuf,
    /// Per-request timeout in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            api_url: env::var("FITLINK_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            meals_api_url: env::var("FITLINK_MEALS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            token_path: env::var("FITLINK_TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_token_path()),
            http_timeout_secs: env::var("FITLINK_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            meals_api_url: "http://localhost:8082".to_string(),
            token_path: env::temp_dir().join("fitlink-test").join("accessToken"),
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// Where the token lives when `FITLINK_TOKEN_PATH` is unset.
///
/// The file keeps the `accessToken` key name the mobile apps use for
/// their on-device storage.
fn default_token_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("fitlink")
        .join("accessToken")
}
