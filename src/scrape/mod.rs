// src/scrape/mod.rs
mod collect;

pub use collect::{CollectSummary, Collected, Collector, page_url};
