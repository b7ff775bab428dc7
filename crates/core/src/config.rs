//! Runtime configuration loaded from the environment.
//!
//! Built once at process entry and passed down to the clients; nothing else
//! reads environment variables. Validation happens before any network call
//! and reports every missing variable at once.

use crate::error::{Error, Result};

/// Environment variable holding the scraping service API key.
pub const FIRECRAWL_API_KEY: &str = "FIRECRAWL_API_KEY";
/// Environment variable holding the presentation service API key.
pub const ALAI_API_KEY: &str = "ALAI_API_KEY";
/// Environment variable holding the presentation service account email.
pub const ALAI_EMAIL: &str = "ALAI_EMAIL";
/// Environment variable holding the presentation service account password.
pub const ALAI_PASSWORD: &str = "ALAI_PASSWORD";

/// Required configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the scraping service.
    pub firecrawl_api_key: String,

    /// API key for the presentation service.
    pub alai_api_key: String,

    /// Account email for presentation service authentication.
    pub alai_email: String,

    /// Account password for presentation service authentication.
    pub alai_password: String,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through a lookup function.
    ///
    /// All missing or empty variables are collected and reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut get = |name: &'static str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let config = Self {
            firecrawl_api_key: get(FIRECRAWL_API_KEY),
            alai_api_key: get(ALAI_API_KEY),
            alai_email: get(ALAI_EMAIL),
            alai_password: get(ALAI_PASSWORD),
        };

        if missing.is_empty() {
            Ok(config)
        } else {
            Err(Error::Config(format!(
                "missing environment variable(s): {}",
                missing.join(", ")
            )))
        }
    }
}
