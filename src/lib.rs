// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod file;
pub mod normalize;
pub mod progress;
pub mod records;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod store;
