// src/report/histogram.rs
use std::collections::BTreeMap;

use crate::records::CleanRecord;

/// Equal-width bins over `[lo, hi]`. Every bin is half-open except the last,
/// which also takes values equal to `hi`.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<u32>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    /// `(left edge, right edge, count)` per bin.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, u32)> + '_ {
        let w = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &c)| {
            let x0 = self.lo + w * i as f64;
            let x1 = if i + 1 == self.counts.len() { self.hi } else { x0 + w };
            (x0, x1, c)
        })
    }

    pub fn total(&self) -> u32 { self.counts.iter().sum() }

    pub fn max_count(&self) -> u32 { self.counts.iter().copied().max().unwrap_or(0) }
}

/// Bucket `values` into `bins` equal-width bins spanning their min..max.
/// All-equal values span `[v - 0.5, v + 0.5]`; no values span `[0, 1]`.
/// Non-finite values are ignored.
pub fn price_histogram(values: &[f64], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let (lo, hi) = match span(&values) {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        Some(range) => range,
    };

    let mut counts = vec![0u32; bins];
    let w = (hi - lo) / bins as f64;
    for &v in &values {
        let i = (((v - lo) / w).floor() as usize).min(bins - 1);
        counts[i] += 1;
    }
    Histogram { lo, hi, counts }
}

fn span(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Mean price per star rating, ascending by rating. Ratings with no rows are
/// absent. Rows with a non-finite price are skipped.
pub fn mean_price_by_rating(rows: &[CleanRecord]) -> Vec<(u8, f64)> {
    let mut acc: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
    for r in rows.iter().filter(|r| r.price.is_finite()) {
        let e = acc.entry(r.rating).or_insert((0.0, 0));
        e.0 += r.price;
        e.1 += 1;
    }
    acc.into_iter().map(|(rating, (sum, n))| (rating, sum / n as f64)).collect()
}
