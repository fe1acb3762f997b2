// tests/common/mod.rs
#![allow(dead_code)]
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use books_scrape::config::PipelineOptions;
use books_scrape::core::PageFetcher;
use books_scrape::error::FetchError;

pub const BASE: &str = "http://fixture.local/catalogue/";

/// Serves `tests/fixtures/page-N.html` for `{BASE}page-N.html`; anything else is a 404.
pub struct FixtureFetcher {
    pub asked: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self { asked: RefCell::new(Vec::new()) }
    }
}

impl PageFetcher for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.asked.borrow_mut().push(url.to_string());
        let not_found = || FetchError::Status { url: url.to_string(), status: 404 };
        let name = url.strip_prefix(BASE).ok_or_else(not_found)?;
        fs::read_to_string(fixture_path(name)).map_err(|_| not_found())
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Every stage rooted under `root`, fetching `pages` fixture pages with no pause.
pub fn options(root: &Path, pages: u32) -> PipelineOptions {
    let mut opts = PipelineOptions::rooted_at(root);
    opts.collect.base_url = BASE.to_string();
    opts.collect.pages = pages;
    opts.collect.pause = Duration::ZERO;
    opts
}
