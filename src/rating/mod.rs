//! Elo rating engine: keyed ledgers, the update rule, and the sequential
//! processors that fold bout sequences through them.

pub mod elo;
pub mod ledger;
pub mod processor;

// Re-export commonly used types
pub use elo::EloCalculator;
pub use ledger::{DivisionLedger, GlobalLedger, RatingEntry};
pub use processor::{DivisionProcessor, GlobalProcessor};
