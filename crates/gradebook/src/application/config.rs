//! Application Configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Gradebook application configuration
#[derive(Debug, Clone)]
pub struct GradebookConfig {
    /// Endpoint that receives submission events
    pub notify_endpoint: String,
    /// Upper bound on a single dispatch round trip
    pub notify_timeout: Duration,
    /// Optional CSV file of accounts to import at startup
    pub accounts_csv: Option<PathBuf>,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            notify_endpoint: "http://127.0.0.1:9000/submissions".to_string(),
            notify_timeout: Duration::from_secs(5),
            accounts_csv: None,
        }
    }
}

impl GradebookConfig {
    /// Build from environment variables, falling back to defaults.
    ///
    /// Recognized: `NOTIFY_WEBHOOK_URL`, `NOTIFY_TIMEOUT_SECS`,
    /// `ACCOUNTS_CSV`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let notify_endpoint =
            env::var("NOTIFY_WEBHOOK_URL").unwrap_or(defaults.notify_endpoint);

        let notify_timeout = env::var("NOTIFY_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.notify_timeout);

        let accounts_csv = env::var("ACCOUNTS_CSV").ok().map(PathBuf::from);

        Self {
            notify_endpoint,
            notify_timeout,
            accounts_csv,
        }
    }
}
