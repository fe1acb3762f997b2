// src/normalize/mod.rs
//! Raw table → clean table.
//!
//! Order matters: prices and ratings are converted first, then every row with
//! a price is scored (rows with an unknown rating included), and only then are
//! incomplete rows dropped. The z-scores of the kept rows are therefore
//! relative to every priced row that was scraped.
mod stats;

pub use stats::PriceStats;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::{
    config::{NormalizeOptions, consts::RATING_TABLE},
    error::{Result, Stage},
    records::{CleanRecord, RawRecord},
    store,
};

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").unwrap_or_else(|e| panic!("price pattern: {e}")));

/// First `digits.digits` run in the text, e.g. `"Â£51.77"` → 51.77.
pub fn extract_price(text: &str) -> Option<f64> {
    PRICE_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Star count for a rating token. `"None"` and anything outside the table
/// map to `None`.
pub fn map_rating(text: &str) -> Option<u8> {
    RATING_TABLE
        .iter()
        .find(|(token, _)| *token == text.trim())
        .and_then(|(_, stars)| *stars)
}

fn is_known_rating(text: &str) -> bool {
    RATING_TABLE.iter().any(|(token, _)| *token == text.trim())
}

/// A row between conversion and filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredRow {
    pub title: String,
    pub price: Option<f64>,
    pub rating: Option<u8>,
    pub availability: String,
    pub price_z_score: Option<f64>,
    pub is_outlier: bool,
}

impl ScoredRow {
    fn into_clean(self) -> Option<CleanRecord> {
        Some(CleanRecord {
            title: self.title,
            price: self.price?,
            rating: self.rating?,
            availability: self.availability,
            price_z_score: self.price_z_score?,
            is_outlier: self.is_outlier,
        })
    }
}

/// Convert price text and rating token of every row. Nothing is dropped here.
pub fn convert(raw: Vec<RawRecord>) -> Vec<ScoredRow> {
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| {
            let price = extract_price(&r.price_raw);
            if price.is_none() {
                warn!("Normalize: No price in {:?} row={} title={:?}", r.price_raw, i + 1, r.title);
            }
            if !is_known_rating(&r.rating_text) {
                warn!("Normalize: Unknown rating {:?} row={} title={:?}", r.rating_text, i + 1, r.title);
            }
            ScoredRow {
                title: r.title,
                price,
                rating: map_rating(&r.rating_text),
                availability: r.availability,
                price_z_score: None,
                is_outlier: false,
            }
        })
        .collect()
}

/// Score every priced row against the population statistics of all priced
/// rows. Returns the statistics, or `None` when no row has a price.
pub fn flag_outliers(rows: &mut [ScoredRow], threshold: f64) -> Option<PriceStats> {
    let stats = PriceStats::from_prices(rows.iter().filter_map(|r| r.price))?;
    for row in rows.iter_mut() {
        if let Some(price) = row.price {
            let z = stats.z_score(price);
            row.price_z_score = Some(z);
            row.is_outlier = z.abs() > threshold;
        }
    }
    Some(stats)
}

/// Drop rows missing a price or a rating.
pub fn retain_complete(rows: Vec<ScoredRow>) -> Vec<CleanRecord> {
    rows.into_iter().filter_map(ScoredRow::into_clean).collect()
}

#[derive(Debug)]
pub struct Normalized {
    pub records: Vec<CleanRecord>,
    pub stats: Option<PriceStats>,
    pub dropped: usize,
}

/// Convert, score, filter.
pub fn normalize(raw: Vec<RawRecord>, threshold: f64) -> Normalized {
    let mut rows = convert(raw);
    let stats = flag_outliers(&mut rows, threshold);
    let before = rows.len();
    let records = retain_complete(rows);
    Normalized { dropped: before - records.len(), records, stats }
}

#[derive(Debug)]
pub struct NormalizeSummary {
    pub loaded: usize,
    pub kept: usize,
    pub dropped: usize,
    pub outliers: usize,
    pub stats: Option<PriceStats>,
}

/// Read the raw CSV, normalize, write the clean CSV.
pub fn run(opts: &NormalizeOptions) -> Result<NormalizeSummary> {
    let raw = store::load_raw(&opts.in_path, Stage::Normalize)
        .inspect_err(|e| tracing::error!("Normalize: {e}"))?;
    let loaded = raw.len();
    info!("Normalize: Loaded rows={} ← {}", loaded, opts.in_path.display());

    let out = normalize(raw, opts.outlier_threshold);
    match &out.stats {
        Some(s) => info!(
            "Normalize: Price stats n={} mean={:.4} std={:.4} threshold={}",
            s.count, s.mean, s.std_dev, opts.outlier_threshold
        ),
        None => warn!("Normalize: No priced rows; writing an empty table"),
    }
    info!("Normalize: Dropped {} rows with missing critical data", out.dropped);

    store::save_clean(&opts.out_path, &out.records)
        .inspect_err(|e| tracing::error!("Normalize: Save failed: {e}"))?;
    info!("Normalize: Saved rows={} → {}", out.records.len(), opts.out_path.display());

    Ok(NormalizeSummary {
        loaded,
        kept: out.records.len(),
        dropped: out.dropped,
        outliers: out.records.iter().filter(|r| r.is_outlier).count(),
        stats: out.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn raw(title: &str, price: &str, rating: &str) -> RawRecord {
        RawRecord {
            title: s!(title),
            price_raw: s!(price),
            rating_text: s!(rating),
            availability: s!("In stock"),
        }
    }

    #[rstest]
    #[case("£51.77", Some(51.77))]
    #[case("Â£13.99", Some(13.99))]
    #[case("12.34", Some(12.34))]
    #[case("£ 7.5 or 8.25", Some(7.5))]
    #[case("£12", None)]
    #[case("", None)]
    fn price_extraction(#[case] text: &str, #[case] want: Option<f64>) {
        assert_eq!(extract_price(text), want);
    }

    #[rstest]
    #[case("One", Some(1))]
    #[case("Two", Some(2))]
    #[case("Three", Some(3))]
    #[case("Four", Some(4))]
    #[case("Five", Some(5))]
    #[case("None", None)]
    #[case("Zero", None)]
    #[case("three", None)]
    fn rating_table(#[case] text: &str, #[case] want: Option<u8>) {
        assert_eq!(map_rating(text), want);
    }

    #[test]
    fn scores_include_rows_later_dropped_for_rating() {
        // Priced rows: 10, 20, 30, 40 → mean 25. The unrated 40 still counts.
        let rows = vec![
            raw("a", "£10.00", "One"),
            raw("b", "£20.00", "Two"),
            raw("c", "£30.00", "Three"),
            raw("d", "£40.00", "None"),
            raw("e", "free", "Five"),
        ];
        let out = normalize(rows, 2.0);

        let stats = out.stats.unwrap();
        assert_eq!(stats.count, 4);
        assert!((stats.mean - 25.0).abs() < 1e-12);

        let titles: Vec<_> = out.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert_eq!(out.dropped, 2);

        let a = &out.records[0];
        assert!((a.price_z_score - (10.0 - 25.0) / stats.std_dev).abs() < 1e-12);
    }

    #[test]
    fn outlier_flag_matches_threshold() {
        let mut rows: Vec<_> = (0..9).map(|i| raw(&format!("n{i}"), "£10.00", "Three")).collect();
        rows.push(raw("spike", "£100.00", "Three"));
        let out = normalize(rows, 2.0);

        for r in &out.records {
            assert_eq!(r.is_outlier, r.price_z_score.abs() > 2.0, "{}", r.title);
        }
        assert!(out.records.last().unwrap().is_outlier);
        assert_eq!(out.records.iter().filter(|r| r.is_outlier).count(), 1);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = normalize(Vec::new(), 2.0);
        assert!(out.records.is_empty());
        assert!(out.stats.is_none());
        assert_eq!(out.dropped, 0);
    }

    #[test]
    fn unpriced_rows_only() {
        let out = normalize(vec![raw("x", "n/a", "Two")], 2.0);
        assert!(out.records.is_empty());
        assert_eq!(out.dropped, 1);
    }
}
