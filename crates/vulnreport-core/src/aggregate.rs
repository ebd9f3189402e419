use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::model::Vulnerability;

/// Minimum severity for a record to participate in family ranking.
const RANKING_SEVERITY_FLOOR: f64 = 1.0;

/// Summed vulnerability count for one plugin family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyTotal {
    pub family: String,
    pub total: u64,
}

/// Rank plugin families by summed vulnerability count, descending.
///
/// Records below the severity floor are excluded entirely. The sort is
/// stable, so families with equal totals keep the order in which they
/// were first encountered. At most `n` entries are returned.
pub fn rank_by_family(records: &[Vulnerability], n: usize) -> Vec<FamilyTotal> {
    let mut totals: Vec<FamilyTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if record.severity < RANKING_SEVERITY_FLOOR {
            continue;
        }
        match index.get(record.plugin_family.as_str()) {
            Some(&slot) => totals[slot].total += record.count,
            None => {
                index.insert(record.plugin_family.as_str(), totals.len());
                totals.push(FamilyTotal {
                    family: record.plugin_family.clone(),
                    total: record.count,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals.truncate(n);
    totals
}

/// One of the four fixed severity bands partitioning (0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Critical,
    High,
    Medium,
    Low,
}

impl SeverityTier {
    /// Fixed display order, most severe first.
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::Critical,
        SeverityTier::High,
        SeverityTier::Medium,
        SeverityTier::Low,
    ];

    /// Map a severity score into its tier.
    ///
    /// Severity 0 belongs to no tier. Scores outside the 0–10 scale are
    /// logged and excluded rather than counted.
    pub fn from_severity(severity: f64) -> Option<Self> {
        if !(0.0..=10.0).contains(&severity) {
            warn!(severity, "severity outside the 0-10 scale; record excluded");
            return None;
        }
        match severity {
            s if s >= 9.0 => Some(Self::Critical),
            s if s >= 7.0 => Some(Self::High),
            s if s >= 4.0 => Some(Self::Medium),
            s if s > 0.0 => Some(Self::Low),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-tier vulnerability totals for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierTotals {
    critical: u64,
    high: u64,
    medium: u64,
    low: u64,
}

impl TierTotals {
    pub fn get(&self, tier: SeverityTier) -> u64 {
        match tier {
            SeverityTier::Critical => self.critical,
            SeverityTier::High => self.high,
            SeverityTier::Medium => self.medium,
            SeverityTier::Low => self.low,
        }
    }

    fn add(&mut self, tier: SeverityTier, count: u64) {
        match tier {
            SeverityTier::Critical => self.critical += count,
            SeverityTier::High => self.high += count,
            SeverityTier::Medium => self.medium += count,
            SeverityTier::Low => self.low += count,
        }
    }

    /// `(tier, total)` pairs in fixed Critical→Low order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (SeverityTier, u64)> + '_ {
        SeverityTier::ALL.iter().map(move |&tier| (tier, self.get(tier)))
    }

    /// Tiers with a non-zero total, in fixed order.
    pub fn non_zero(&self) -> Vec<(SeverityTier, u64)> {
        self.iter().filter(|&(_, total)| total > 0).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.grand_total() == 0
    }

    pub fn grand_total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low
    }
}

/// Bucket every record into its severity tier and sum the counts.
///
/// Severity-0 records are dropped by design, so the grand total can be
/// smaller than the sum of all record counts.
pub fn categorize(records: &[Vulnerability]) -> TierTotals {
    let mut totals = TierTotals::default();
    for record in records {
        if let Some(tier) = SeverityTier::from_severity(record.severity) {
            totals.add(tier, record.count);
        }
    }
    totals
}
