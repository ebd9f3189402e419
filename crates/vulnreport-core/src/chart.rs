use std::fmt::Display;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::aggregate::TierTotals;

const CHART_SIZE: u32 = 600;

/// Failure modes of the chart renderer.
///
/// `NoData` is the normal "nothing to draw" outcome and must not be
/// treated as an error by callers; the other variants are reported and
/// the run continues with the next scan.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no categorized vulnerabilities to chart")]
    NoData,
    #[error("chart rendering failed: {message}")]
    Render { message: String },
    #[error("failed to write chart to {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Deterministic file name for a scan's categorized chart.
pub fn chart_file_name(scan_id: u64) -> String {
    format!("{scan_id}_categorized.png")
}

/// Render the per-tier totals as a square pie chart under `dir`.
///
/// Zero tiers are dropped before drawing; if nothing remains, no file
/// is written and `NoData` is returned. Each slice is annotated with
/// its percentage share to one decimal place. An existing chart for
/// the same scan is overwritten.
pub fn render_pie(totals: &TierTotals, scan_id: u64, dir: &Path) -> Result<PathBuf, ChartError> {
    let slices = totals.non_zero();
    if slices.is_empty() {
        return Err(ChartError::NoData);
    }

    let path = dir.join(chart_file_name(scan_id));
    let sizes: Vec<f64> = slices.iter().map(|&(_, total)| total as f64).collect();
    let labels: Vec<String> = slices.iter().map(|&(tier, _)| tier.to_string()).collect();
    let colors: Vec<RGBColor> = slices.iter().map(|&(tier, _)| tier_color(tier)).collect();

    let root = BitMapBackend::new(&path, (CHART_SIZE, CHART_SIZE)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let chart_area = root
        .titled(
            &format!("Scan #{scan_id}: vulnerabilities by severity"),
            ("sans-serif", 28),
        )
        .map_err(render_err)?;

    let center = (CHART_SIZE as i32 / 2, CHART_SIZE as i32 / 2);
    let radius = CHART_SIZE as f64 * 0.35;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(0.0);
    pie.label_style(("sans-serif", 20).into_font());
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
    chart_area.draw(&pie).map_err(render_err)?;

    root.present().map_err(|e| ChartError::Write {
        path: path.clone(),
        message: e.to_string(),
    })?;
    drop(chart_area);
    drop(root);

    debug!(path = %path.display(), "chart written");
    Ok(path)
}

fn render_err(err: impl Display) -> ChartError {
    ChartError::Render {
        message: err.to_string(),
    }
}

fn tier_color(tier: crate::aggregate::SeverityTier) -> RGBColor {
    use crate::aggregate::SeverityTier::*;
    match tier {
        Critical => RGBColor(178, 24, 43),
        High => RGBColor(239, 138, 98),
        Medium => RGBColor(253, 219, 96),
        Low => RGBColor(103, 169, 207),
    }
}
