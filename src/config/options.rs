// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOptions {
    pub collect: CollectOptions,
    pub normalize: NormalizeOptions,
    pub report: ReportOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            collect: CollectOptions::default(),
            normalize: NormalizeOptions::default(),
            report: ReportOptions::default(),
        }
    }
}

impl PipelineOptions {
    /// Point every stage at the same `data/` + `plots/` layout under `root`.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data = root.join(DATA_DIR);
        let mut opts = Self::default();
        opts.collect.out_path = data.join(RAW_FILE);
        opts.normalize.in_path = data.join(RAW_FILE);
        opts.normalize.out_path = data.join(CLEAN_FILE);
        opts.report.in_path = data.join(CLEAN_FILE);
        opts.report.out_dir = root.join(PLOTS_DIR);
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub base_url: String,
    pub pages: u32,
    pub user_agent: String,
    pub timeout: Duration,
    /// Pause between two page fetches. Not applied after the last page.
    pub pause: Duration,
    pub out_path: PathBuf,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            pages: DEFAULT_PAGES,
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            out_path: PathBuf::from(DATA_DIR).join(RAW_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizeOptions {
    pub in_path: PathBuf,
    pub out_path: PathBuf,
    pub outlier_threshold: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            in_path: PathBuf::from(DATA_DIR).join(RAW_FILE),
            out_path: PathBuf::from(DATA_DIR).join(CLEAN_FILE),
            outlier_threshold: OUTLIER_Z_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub in_path: PathBuf,
    pub out_dir: PathBuf,
    pub bins: usize,
    pub size: (u32, u32),
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            in_path: PathBuf::from(DATA_DIR).join(CLEAN_FILE),
            out_dir: PathBuf::from(PLOTS_DIR),
            bins: HISTOGRAM_BINS,
            size: CHART_SIZE,
        }
    }
}

impl ReportOptions {
    pub fn price_distribution_path(&self) -> PathBuf {
        self.out_dir.join(PRICE_DIST_FILE)
    }

    pub fn rating_vs_price_path(&self) -> PathBuf {
        self.out_dir.join(RATING_PRICE_FILE)
    }
}
