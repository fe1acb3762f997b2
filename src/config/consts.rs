// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://books.toscrape.com/catalogue/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Scrape
pub const DEFAULT_PAGES: u32 = 5;
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite

// Files
pub const DATA_DIR: &str = "data";
pub const RAW_FILE: &str = "raw_books_data.csv";
pub const CLEAN_FILE: &str = "clean_books_data.csv";
pub const PLOTS_DIR: &str = "plots";

// Normalize
/// Rating class token → star count. `None` is the literal the collector
/// writes when a listing carries no rating.
pub const RATING_TABLE: [(&str, Option<u8>); 6] = [
    ("One", Some(1)),
    ("Two", Some(2)),
    ("Three", Some(3)),
    ("Four", Some(4)),
    ("Five", Some(5)),
    ("None", None),
];
pub const OUTLIER_Z_THRESHOLD: f64 = 2.0;

// Report
pub const HISTOGRAM_BINS: usize = 20;
pub const CHART_SIZE: (u32, u32) = (1000, 600);
pub const CROP_PAD_PX: u32 = 8;

pub const PRICE_DIST_FILE: &str = "price_distribution.png";
pub const PRICE_DIST_TITLE: &str = "Distribution of Book Prices (Excluding Outliers)";
pub const PRICE_DIST_X: &str = "Price (£)";
pub const PRICE_DIST_Y: &str = "Number of Books";

pub const RATING_PRICE_FILE: &str = "rating_vs_price.png";
pub const RATING_PRICE_TITLE: &str = "Average Price by Star Rating";
pub const RATING_PRICE_X: &str = "Star Rating (1-5)";
pub const RATING_PRICE_Y: &str = "Average Price (£)";
pub const RATING_TICKS: [u8; 5] = [1, 2, 3, 4, 5];

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";
