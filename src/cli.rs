// src/cli.rs
use std::env;

use crate::{
    config::PipelineOptions,
    core::HttpFetcher,
    error::{PipelineError, Result, Stage},
    progress::Progress,
    runner,
};

const HELP: &str = "\
Scrape the books.toscrape.com catalogue, clean it and chart it.

Usage: books_scrape [--pages <N>]

Options:
  -p, --pages <N>   Number of catalogue pages to fetch (default 5)
  -h, --help        Print this help

Writes data/raw_books_data.csv, data/clean_books_data.csv and two PNGs under plots/.
Set RUST_LOG (e.g. RUST_LOG=debug) to change log verbosity.";

const RULE: &str = "==================================================";

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(PipelineOptions),
    Help,
}

/// Parse everything after the program name.
pub fn parse_args<I, A>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    let mut opts = PipelineOptions::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_ref() {
            "-p" | "--pages" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --pages"))?;
                opts.collect.pages = v
                    .as_ref()
                    .parse()
                    .map_err(|_| usage(format!("Invalid page count: {}", v.as_ref())))?;
            }
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(usage(format!("Unknown arg: {other}"))),
        }
    }
    Ok(Command::Run(opts))
}

pub fn run() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Run(opts) => run_pipeline(&opts),
    }
}

fn run_pipeline(opts: &PipelineOptions) -> Result<()> {
    let fetcher = HttpFetcher::new(&opts.collect)?;
    let mut progress = ConsoleProgress::default();

    println!("{RULE}\nStarting books data pipeline\n{RULE}");
    let summary = runner::run(opts, fetcher, Some(&mut progress))?;

    println!("\n{RULE}\nPipeline completed");
    for path in &summary.files_written {
        println!("  wrote {}", path.display());
    }
    println!("{RULE}");
    Ok(())
}

/* ---------- helpers ---------- */

fn usage(msg: impl Into<String>) -> PipelineError {
    PipelineError::Usage(format!("{}\n\n{HELP}", msg.into()))
}

/// Prints phase banners and per-page status to stdout.
#[derive(Default)]
struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn stage(&mut self, stage: Stage) {
        let title = match stage {
            Stage::Collect => "PHASE 1: EXTRACTION",
            Stage::Normalize => "PHASE 2: PROCESSING & CLEANING",
            Stage::Report => "PHASE 3: DATA VISUALIZATION",
        };
        println!("\n--- {title} ---");
    }
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, page: u32) {
        self.done += 1;
        println!("Scraped page {} ({}/{})", page, self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, page: u32) {
        self.failed += 1;
        println!("Skipped page {} ({}/{})", page, self.done + self.failed, self.total);
    }
    fn finish(&mut self) {
        if self.total == 0 {
            println!("Fetch complete"); // no counts if we never began
        } else {
            println!("Fetch complete ({} ok, {} skipped)", self.done, self.failed);
        }
    }
}
