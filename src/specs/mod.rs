// src/specs/mod.rs
//! # Listing specs
//!
//! A spec knows **where the ground truth lives in one page's HTML** and how to
//! turn one listing entry into a [`RawRecord`](crate::records::RawRecord).
//!
//! ## What lives here
//! - The entry selector for a catalogue page.
//! - The per-entry extraction rule (title, price text, rating token,
//!   availability).
//!
//! ## What does **not** live here
//! - Fetching, pacing, skipping failed pages: that is `scrape`.
//! - Cleaning or type conversion: that is `normalize`. Specs hand over text as
//!   found on the page (whitespace aside).
//!
//! ## Conventions
//! - An entry that lacks a required field is reported as an
//!   [`EntryError`](crate::error::EntryError); the caller decides to skip it.
//!   Other entries on the same page are unaffected.
//! - Results come back in document order.
//!
//! Swapping the extraction rule means adding another [`ListingSpec`] impl; the
//! collector loop does not change.
pub mod listing;

pub use listing::{BookPodSpec, ListingSpec};
