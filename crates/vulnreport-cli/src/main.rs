use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vulnreport_core::{
    categorize, rank_by_family, render_pie, report, ApiSettings, ChartError, ScanApi,
    TenableClient,
};

/// Fixed size of the per-scan family ranking.
const TOP_FAMILIES: usize = 5;

#[derive(Parser, Debug)]
#[command(
    name = "vulnreport",
    author,
    version,
    about = "Per-scan vulnerability rankings and severity pie charts"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let _cli = Cli::parse();

    let settings = ApiSettings::from_env().context("failed to load platform credentials")?;
    let client = TenableClient::new(&settings)?;
    run(&client, Path::new(".")).await
}

/// Process every accessible scan in platform order.
///
/// Fetch failures are fatal; chart failures are reported and the run
/// moves on to the next scan.
async fn run(api: &dyn ScanApi, out_dir: &Path) -> Result<()> {
    let scans = api.list_scans().await.context("failed to list scans")?;
    debug!(count = scans.len(), "scan list fetched");

    for scan in scans {
        println!("#{}: \"{}\"", scan.id, scan.name);

        let results = api
            .scan_results(scan.id)
            .await
            .with_context(|| format!("failed to fetch results for scan {}", scan.id))?;

        let ranking = rank_by_family(&results.vulnerabilities, TOP_FAMILIES);
        print!("{}", report::render_ranking(&ranking, TOP_FAMILIES)?);

        let totals = categorize(&results.vulnerabilities);
        print!("{}", report::render_tiers(&totals)?);

        match render_pie(&totals, scan.id, out_dir) {
            Ok(path) => println!("  Chart saved to '{}'.", path.display()),
            Err(ChartError::NoData) => println!("  Not enough data to generate a chart."),
            Err(err) => println!("  Chart generation failed: {err}."),
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
