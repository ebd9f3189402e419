use std::collections::HashMap;

use anyhow::{Context, Result};

/// Environment-driven configuration for platform access.
///
/// Credentials are loaded once here and passed explicitly to
/// [`super::TenableClient::new`]; nothing else reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub access_key: String,
    pub secret_key: String,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ApiSettings {
    const ACCESS_KEY_ENV: &'static str = "VULNREPORT_ACCESS_KEY";
    const SECRET_KEY_ENV: &'static str = "VULNREPORT_SECRET_KEY";
    const ENDPOINT_ENV: &'static str = "VULNREPORT_ENDPOINT";
    const TIMEOUT_ENV: &'static str = "VULNREPORT_TIMEOUT_SECS";

    /// Load settings from environment variables.
    ///
    /// * `VULNREPORT_ACCESS_KEY`   — platform access key (required).
    /// * `VULNREPORT_SECRET_KEY`   — platform secret key (required).
    /// * `VULNREPORT_ENDPOINT`     — optional custom base URL.
    /// * `VULNREPORT_TIMEOUT_SECS` — optional HTTP timeout.
    pub fn from_env() -> Result<Self> {
        Self::from_map(std::env::vars().collect())
    }

    fn from_map(vars: HashMap<String, String>) -> Result<Self> {
        let access_key = required(&vars, Self::ACCESS_KEY_ENV)?;
        let secret_key = required(&vars, Self::SECRET_KEY_ENV)?;
        let endpoint = vars
            .get(Self::ENDPOINT_ENV)
            .cloned()
            .filter(|v| !v.trim().is_empty());
        let timeout_secs = vars
            .get(Self::TIMEOUT_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok());

        Ok(Self {
            access_key,
            secret_key,
            endpoint,
            timeout_secs,
        })
    }
}

fn required(vars: &HashMap<String, String>, key: &str) -> Result<String> {
    vars.get(key)
        .cloned()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("environment variable {key} must be set"))
}
