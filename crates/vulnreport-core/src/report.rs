use std::fmt::Write;

use crate::aggregate::{FamilyTotal, TierTotals};

/// Render the "Top N by plugin family" console block.
///
/// An empty ranking renders the header with no entries.
pub fn render_ranking(ranking: &[FamilyTotal], n: usize) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "  Top {n} by plugin family:")?;
    for (rank, entry) in ranking.iter().enumerate() {
        writeln!(
            out,
            "    {}. {}: {} vulnerabilities",
            rank + 1,
            entry.family,
            entry.total
        )?;
    }
    Ok(out)
}

/// Render the severity-tier console block, zero tiers included.
pub fn render_tiers(totals: &TierTotals) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "  Vulnerability categories:")?;
    for (tier, total) in totals.iter() {
        writeln!(out, "    {tier}: {total}")?;
    }
    Ok(out)
}
