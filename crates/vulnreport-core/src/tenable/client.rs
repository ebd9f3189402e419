use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ApiSettings, ScanApi};
use crate::model::{ScanDescriptor, ScanResults};

const DEFAULT_ENDPOINT: &str = "https://cloud.tenable.com";

/// Client for the scan platform's REST API.
///
/// Requests are issued one at a time with no retry; an unreachable
/// platform surfaces as an error to the caller.
#[derive(Debug, Clone)]
pub struct TenableClient {
    http: Client,
    base: String,
    api_keys: String,
}

impl TenableClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        if settings.access_key.trim().is_empty() || settings.secret_key.trim().is_empty() {
            bail!("platform access and secret keys must both be provided");
        }
        let base = settings
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let http = Client::builder()
            .user_agent(concat!("vulnreport/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs.unwrap_or(30)))
            .build()
            .context("failed to build platform HTTP client")?;
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            api_keys: format!(
                "accessKey={}; secretKey={}",
                settings.access_key, settings.secret_key
            ),
        })
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base, path);
        debug!(%url, "requesting scan platform");
        let response = self
            .http
            .get(&url)
            .header("X-ApiKeys", &self.api_keys)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("failed to call {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("platform API error ({status}): {body}");
        }

        response
            .json()
            .await
            .with_context(|| format!("failed to parse response from {url}"))
    }
}

#[async_trait]
impl ScanApi for TenableClient {
    async fn list_scans(&self) -> Result<Vec<ScanDescriptor>> {
        let list: ScanList = self.get("/scans").await?;
        Ok(list.scans)
    }

    async fn scan_results(&self, scan_id: u64) -> Result<ScanResults> {
        self.get(&format!("/scans/{scan_id}")).await
    }
}

#[derive(Deserialize)]
struct ScanList {
    #[serde(default)]
    scans: Vec<ScanDescriptor>,
}
