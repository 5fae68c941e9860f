//! SQLite schema and data-access layer for daily biometric exports.
//!
//! A `daily_statistics` row anchors each calendar date; sleep sessions,
//! sleep movement intervals, heart-rate samples and movement samples hang
//! off it and are removed (or re-keyed) along with it.

pub mod daily;
pub mod db;
pub mod decimal;
pub mod error;
pub mod models;
pub mod samples;
pub mod sleep;
pub mod summary;

#[cfg(test)]
mod test_utils;

pub use db::{connect, migrate, DbPool, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use summary::{store_summary, StoreSummary};
