// src/scrape/collect.rs
use std::{path::PathBuf, thread};

use tracing::{debug, error, info, warn};

use crate::{
    config::CollectOptions,
    core::PageFetcher,
    error::Result,
    file::remove_stale,
    progress::Progress,
    records::RawRecord,
    specs::ListingSpec,
    store,
};

/// `{base}page-{n}.html`
pub fn page_url(base: &str, n: u32) -> String {
    format!("{base}page-{n}.html")
}

/// Records gathered in one pass, plus what had to be skipped on the way.
#[derive(Debug, Default)]
pub struct Collected {
    pub records: Vec<RawRecord>,
    pub pages_failed: Vec<u32>,
    pub entries_skipped: usize,
}

#[derive(Debug)]
pub struct CollectSummary {
    pub records: usize,
    pub pages_failed: Vec<u32>,
    pub entries_skipped: usize,
    /// `None` when nothing was collected and no file was written.
    pub written: Option<PathBuf>,
}

pub struct Collector<F, S> {
    fetcher: F,
    spec: S,
    opts: CollectOptions,
}

impl<F: PageFetcher, S: ListingSpec> Collector<F, S> {
    pub fn new(fetcher: F, spec: S, opts: CollectOptions) -> Self {
        Self { fetcher, spec, opts }
    }

    /// Fetch pages 1..=N in order. A failed page or a malformed entry is
    /// logged and skipped; nothing here aborts the run.
    pub fn collect(&self, mut progress: Option<&mut dyn Progress>) -> Collected {
        let pages = self.opts.pages;
        info!("Collect: Begin pages={} base={}", pages, self.opts.base_url);
        if let Some(p) = progress.as_deref_mut() {
            p.begin(pages as usize);
        }

        let mut out = Collected::default();

        for n in 1..=pages {
            if n > 1 && !self.opts.pause.is_zero() {
                thread::sleep(self.opts.pause); // be polite
            }

            let url = page_url(&self.opts.base_url, n);
            info!("Collect: Fetch {url}");

            let html = match self.fetcher.fetch(&url) {
                Ok(body) => body,
                Err(e) => {
                    error!("Collect: Skip page={n}: {e}");
                    out.pages_failed.push(n);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(n);
                    }
                    continue;
                }
            };

            let entries = self.spec.parse_page(&html);
            debug!("Collect: Parsed page={n} entries={}", entries.len());
            for (i, entry) in entries.into_iter().enumerate() {
                match entry {
                    Ok(rec) => out.records.push(rec),
                    Err(e) => {
                        warn!("Collect: Skip entry page={n} pos={} url={url}: {e}", i + 1);
                        out.entries_skipped += 1;
                    }
                }
            }

            if let Some(p) = progress.as_deref_mut() {
                p.item_done(n);
            }
        }

        info!(
            "Collect: Done records={} pages_failed={} entries_skipped={}",
            out.records.len(),
            out.pages_failed.len(),
            out.entries_skipped
        );
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        out
    }

    /// Write the raw table. With zero records nothing is written, and a raw
    /// file left by an earlier run is removed so the next stage sees no input.
    pub fn save(&self, records: &[RawRecord]) -> Result<Option<PathBuf>> {
        let path = &self.opts.out_path;

        if records.is_empty() {
            warn!("Collect: No data to save");
            if remove_stale(path)? {
                warn!("Collect: Removed stale {}", path.display());
            }
            return Ok(None);
        }

        store::save_raw(path, records)
            .inspect_err(|e| error!("Collect: Save failed: {e}"))?;
        info!("Collect: Saved rows={} → {}", records.len(), path.display());
        Ok(Some(path.clone()))
    }

    /// `collect` then `save`.
    pub fn run(&self, progress: Option<&mut dyn Progress>) -> Result<CollectSummary> {
        let collected = self.collect(progress);
        let written = self.save(&collected.records)?;
        Ok(CollectSummary {
            records: collected.records.len(),
            pages_failed: collected.pages_failed,
            entries_skipped: collected.entries_skipped,
            written,
        })
    }
}
