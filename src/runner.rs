// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::PipelineOptions,
    core::PageFetcher,
    error::{Result, Stage},
    normalize::{self, NormalizeSummary},
    progress::Progress,
    report::{self, ReportSummary},
    scrape::{CollectSummary, Collector},
    specs::BookPodSpec,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub collect: CollectSummary,
    pub normalize: NormalizeSummary,
    pub report: ReportSummary,
    /// Raw table, clean table, then the charts; in the order written.
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: collect → normalize → report, strictly in sequence.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
///
/// A stage failure stops the run. A collect pass that yields nothing writes no
/// raw table, so the run then stops at normalize with a missing-input error.
pub fn run<F: PageFetcher>(
    opts: &PipelineOptions,
    fetcher: F,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut files_written = Vec::new();

    if let Some(p) = progress.as_deref_mut() {
        p.stage(Stage::Collect);
    }
    let collector = Collector::new(fetcher, BookPodSpec::new(), opts.collect.clone());
    let collect = collector.run(progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;
    files_written.extend(collect.written.clone());

    if let Some(p) = progress.as_deref_mut() {
        p.stage(Stage::Normalize);
    }
    let normalize = normalize::run(&opts.normalize)?;
    files_written.push(opts.normalize.out_path.clone());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Kept {} of {} rows ({} outliers)", normalize.kept, normalize.loaded, normalize.outliers));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.stage(Stage::Report);
    }
    let report = report::run(&opts.report)?;
    files_written.extend(report.charts.iter().cloned());

    info!("Run: Done files={}", files_written.len());

    Ok(RunSummary { collect, normalize, report, files_written })
}
