mod client;
mod settings;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::{ScanDescriptor, ScanResults};

pub use client::TenableClient;
pub use settings::ApiSettings;

/// Abstraction over the scan-platform API so the driver can run
/// against in-memory fakes in tests.
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// List every scan the supplied credentials can access, in
    /// platform order.
    async fn list_scans(&self) -> Result<Vec<ScanDescriptor>>;

    /// Fetch the vulnerability results for one scan.
    async fn scan_results(&self, scan_id: u64) -> Result<ScanResults>;
}
