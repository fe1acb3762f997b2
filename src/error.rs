// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Transport failure for one page. The collector logs it and moves on.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// A listing entry that cannot be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("listing entry has no {field}")]
    MissingField { field: &'static str },

    #[error("fragment holds no listing entry")]
    NoEntry,
}

/// Which pipeline stage an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Collect,
    Normalize,
    Report,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stage::Collect => "collect",
            Stage::Normalize => "normalize",
            Stage::Report => "report",
        })
    }
}

/// Errors that stop the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{stage}: input file {} not found (run the previous stage first)", path.display())]
    MissingInput { stage: Stage, path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to render {}: {message}", path.display())]
    Chart { path: PathBuf, message: String },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Usage(String),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }

    pub fn chart(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Chart { path: path.into(), message: message.to_string() }
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

pub type Result<T> = core::result::Result<T, PipelineError>;
