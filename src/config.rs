use serde::{Deserialize, Serialize};

const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the package backend
    pub server_url: String,
    /// Base URL of the public tracking site
    pub client_url: String,
    /// Shared key checked on the login screen
    pub security_key: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            client_url: DEFAULT_CLIENT_URL.to_string(),
            security_key: String::new(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    pub fn new(server_url: &str, client_url: &str, security_key: &str) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            client_url: client_url.trim_end_matches('/').to_string(),
            security_key: security_key.to_string(),
            enable_logging: true,
        }
    }

    /// Loads the configuration baked in at compile time (see build.rs)
    pub fn from_env() -> Self {
        let mut config = Self::new(
            option_env!("SERVER_URL").unwrap_or(DEFAULT_SERVER_URL),
            option_env!("CLIENT_URL").unwrap_or(DEFAULT_CLIENT_URL),
            option_env!("SECURITY_KEY").unwrap_or(""),
        );
        config.enable_logging = option_env!("ENABLE_LOGGING")
            .unwrap_or("true")
            .parse()
            .unwrap_or(true);
        config
    }

    /// Public tracking page for a package
    pub fn tracking_url(&self, package_id: &str) -> String {
        format!("{}/track/{}", self.client_url, package_id)
    }

    /// Public details page for a package
    pub fn details_url(&self, package_id: &str) -> String {
        format!("{}/package/{}", self.client_url, package_id)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
