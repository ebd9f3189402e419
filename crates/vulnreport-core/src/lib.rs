pub mod aggregate;
pub mod chart;
pub mod model;
pub mod report;
pub mod tenable;

pub use aggregate::{categorize, rank_by_family, FamilyTotal, SeverityTier, TierTotals};
pub use chart::{chart_file_name, render_pie, ChartError};
pub use model::{ScanDescriptor, ScanResults, Vulnerability, UNKNOWN_FAMILY};
pub use tenable::{ApiSettings, ScanApi, TenableClient};
