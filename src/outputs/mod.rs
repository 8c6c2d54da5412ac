//! Output generation for scrape runs.
//!
//! - [`json`]: writes the [`crate::models::RunReport`] to a JSON file for
//!   consumption by external clients (the same shape the per-source report
//!   and skills breakdown are logged in)
//! - [`text`]: renders the ranked skills breakdown for the terminal

pub mod json;
pub mod text;
