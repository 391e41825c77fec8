//! Cagerank - Elo-style rating engine for combat-sports bouts
//!
//! This crate folds a chronological record of fights into per-fighter skill
//! ratings, either promotion-wide or per weight division, and keeps the full
//! rating trajectory for trend analysis.

pub mod config;
pub mod dataset;
pub mod error;
pub mod rating;
pub mod report;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{DivisionProcessor, GlobalProcessor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
