use std::env;

use hubzz_core::DEFAULT_CLIENT_BASE;

/// Where remote reads go when `HUBZZ_API_URL` is not set.
pub const DEFAULT_API_BASE: &str = "https://api.hubzz.local";

/// Connection settings for the upstream hubzz API.
///
/// The client never reads the environment on its own. The serving boundary
/// builds one of these once and threads it through.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Whether this execution context may attach the secret key header.
    /// Decided once by the caller, never probed here. Anything that serves
    /// untrusted clients directly must leave this off.
    pub send_api_key: bool,
    /// Where generated deep links point, the main client app.
    pub client_base_url: String,
}

impl ApiConfig {
    /// Reads the configuration from the process environment, for use by the
    /// server binary. Server-side contexts may attach the key header.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("HUBZZ_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            api_key: env::var("HUBZZ_API_KEY").ok(),
            send_api_key: true,
            client_base_url: env::var("HUBZZ_CLIENT_URL")
                .unwrap_or_else(|_| DEFAULT_CLIENT_BASE.to_string()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: None,
            send_api_key: false,
            client_base_url: DEFAULT_CLIENT_BASE.to_string(),
        }
    }
}
