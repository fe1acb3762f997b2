// src/report/mod.rs
//! Clean table → two PNG charts.
//!
//! 1. Price distribution: histogram of every non-outlier price.
//! 2. Rating vs price: mean price per star rating, ratings ascending.
//!
//! Both charts come from the same loaded table and are written in that order.
mod charts;
mod crop;
mod histogram;

pub use charts::{render_price_distribution, render_rating_vs_price};
pub use crop::{content_bounds, tight_crop};
pub use histogram::{Histogram, mean_price_by_rating, price_histogram};

use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    config::ReportOptions,
    error::{Result, Stage},
    file::ensure_directory,
    records::CleanRecord,
    store,
};

#[derive(Debug)]
pub struct ReportSummary {
    /// In the order written.
    pub charts: Vec<PathBuf>,
    pub rows: usize,
    pub plotted_prices: usize,
}

/// Finite prices of the rows not flagged as outliers.
pub fn inlier_prices(rows: &[CleanRecord]) -> Vec<f64> {
    rows.iter().filter(|r| !r.is_outlier && r.price.is_finite()).map(|r| r.price).collect()
}

pub fn run(opts: &ReportOptions) -> Result<ReportSummary> {
    let rows = store::load_clean(&opts.in_path, Stage::Report)
        .inspect_err(|e| tracing::error!("Report: {e}"))?;
    info!("Report: Loaded rows={} ← {}", rows.len(), opts.in_path.display());
    if rows.is_empty() {
        warn!("Report: Clean table is empty; charts will have no data");
    }

    ensure_directory(&opts.out_dir)?;

    let prices = inlier_prices(&rows);
    let hist = price_histogram(&prices, opts.bins);
    let dist_path = opts.price_distribution_path();
    render_price_distribution(&hist, opts.size, &dist_path)
        .inspect_err(|e| tracing::error!("Report: {e}"))?;
    info!("Report: Saved plot to {}", dist_path.display());

    let means = mean_price_by_rating(&rows);
    let rating_path = opts.rating_vs_price_path();
    render_rating_vs_price(&means, opts.size, &rating_path)
        .inspect_err(|e| tracing::error!("Report: {e}"))?;
    info!("Report: Saved plot to {}", rating_path.display());

    Ok(ReportSummary {
        charts: vec![dist_path, rating_path],
        rows: rows.len(),
        plotted_prices: prices.len(),
    })
}
