// src/store.rs
//! CSV persistence for the raw and clean tables.
//!
//! Headers are written explicitly so a table with zero rows still carries its
//! header line. Rows are read back by header name, not position.
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{PipelineError, Result, Stage};
use crate::file::ensure_parent;
use crate::records::{CLEAN_HEADERS, CleanRecord, RAW_HEADERS, RawRecord};

pub fn save_raw(path: &Path, rows: &[RawRecord]) -> Result<()> {
    write_table(path, &RAW_HEADERS, rows)
}

pub fn load_raw(path: &Path, stage: Stage) -> Result<Vec<RawRecord>> {
    read_table(path, stage)
}

pub fn save_clean(path: &Path, rows: &[CleanRecord]) -> Result<()> {
    write_table(path, &CLEAN_HEADERS, rows)
}

pub fn load_clean(path: &Path, stage: Stage) -> Result<Vec<CleanRecord>> {
    read_table(path, stage)
}

/* ---------------- generic table I/O ---------------- */

fn write_table<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let csv_err = |e: csv::Error| PipelineError::csv(path, e);

    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    w.write_record(headers).map_err(csv_err)?;
    for row in rows {
        w.serialize(row).map_err(csv_err)?;
    }
    w.flush().map_err(|e| PipelineError::io(path, e))
}

fn read_table<T: DeserializeOwned>(path: &Path, stage: Stage) -> Result<Vec<T>> {
    if !path.is_file() {
        return Err(PipelineError::MissingInput { stage, path: path.to_path_buf() });
    }
    let mut r = csv::Reader::from_path(path).map_err(|e| PipelineError::csv(path, e))?;
    r.deserialize()
        .collect::<core::result::Result<Vec<T>, _>>()
        .map_err(|e| PipelineError::csv(path, e))
}
