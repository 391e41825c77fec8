//! Sequential rating processors
//!
//! A processor folds a date-ordered bout sequence into ledger state and an
//! append-only history log, one bout at a time. Two variants exist: the
//! promotion-wide processor scales K by experience and finish method, while
//! the per-division processor applies the base K unscaled and carries
//! cross-division rating priors. The two K treatments intentionally differ
//! and are kept separate rather than unified.
//!
//! Ratings are path-dependent: reordering two bouts that share a fighter
//! changes that fighter's final rating. Callers must therefore present
//! bouts sorted ascending by date (ties in original record order); nothing
//! is re-sorted here.

use crate::config::EloConfig;
use crate::error::Result;
use crate::rating::elo::{actual_scores, EloCalculator};
use crate::rating::ledger::{DivisionLedger, GlobalLedger};
use crate::types::{Bout, DivisionSnapshot, RatingSnapshot};
use tracing::warn;

/// Promotion-wide rating processor
#[derive(Debug)]
pub struct GlobalProcessor {
    calculator: EloCalculator,
    ledger: GlobalLedger,
    history: Vec<RatingSnapshot>,
}

impl GlobalProcessor {
    pub fn new(config: EloConfig) -> Result<Self> {
        let calculator = EloCalculator::new(config)?;
        let ledger = GlobalLedger::new(calculator.initial_rating());

        Ok(Self {
            calculator,
            ledger,
            history: Vec::new(),
        })
    }

    /// Fold one bout into the ledger and append history snapshots
    pub fn process(&mut self, bout: &Bout) {
        // Both pre-bout entries are captured before either write, so the
        // update is well defined even when the two keys alias.
        let red = self.ledger.get_or_init(&bout.red);
        let blue = self.ledger.get_or_init(&bout.blue);

        let expected_red = self.calculator.expected_score(red.rating, blue.rating);
        let expected_blue = self.calculator.expected_score(blue.rating, red.rating);
        let (actual_red, actual_blue) = actual_scores(bout.outcome);

        // Experience components may differ per corner; the method component
        // is shared.
        let k_red = self.calculator.scaled_k(red.bouts, bout.method);
        let k_blue = self.calculator.scaled_k(blue.bouts, bout.method);

        let red_rating = self
            .calculator
            .updated_rating(red.rating, k_red, actual_red, expected_red);
        let blue_rating = self
            .calculator
            .updated_rating(blue.rating, k_blue, actual_blue, expected_blue);

        // Counts advance even when K is zero (overturned results).
        self.ledger.update(&bout.red, red_rating, true);
        self.ledger.update(&bout.blue, blue_rating, true);

        self.snapshot(bout, &bout.red);
        self.snapshot(bout, &bout.blue);
    }

    /// Fold a whole pre-sorted bout sequence, in order
    pub fn process_all(&mut self, bouts: &[Bout]) {
        debug_assert!(bouts.windows(2).all(|pair| pair[0].date <= pair[1].date));

        for bout in bouts {
            self.process(bout);
        }
    }

    fn snapshot(&mut self, bout: &Bout, fighter: &str) {
        let entry = self.ledger.get_or_init(fighter);
        self.history.push(RatingSnapshot {
            date: bout.date,
            fighter: fighter.to_string(),
            rating: entry.rating,
            bouts: entry.bouts,
        });
    }

    pub fn ledger(&self) -> &GlobalLedger {
        &self.ledger
    }

    pub fn history(&self) -> &[RatingSnapshot] {
        &self.history
    }

    /// Consume the processor, yielding the final ledger and history log
    pub fn into_parts(self) -> (GlobalLedger, Vec<RatingSnapshot>) {
        (self.ledger, self.history)
    }
}

/// Per-division rating processor
///
/// Bouts without a division label cannot be keyed and are skipped (counted
/// and logged); everything else mirrors the promotion-wide fold with a
/// fixed K for both corners.
#[derive(Debug)]
pub struct DivisionProcessor {
    calculator: EloCalculator,
    ledger: DivisionLedger,
    history: Vec<DivisionSnapshot>,
    skipped: u64,
}

impl DivisionProcessor {
    pub fn new(config: EloConfig) -> Result<Self> {
        let calculator = EloCalculator::new(config)?;
        let ledger = DivisionLedger::new(calculator.initial_rating());

        Ok(Self {
            calculator,
            ledger,
            history: Vec::new(),
            skipped: 0,
        })
    }

    /// Fold one bout into the ledger and append history snapshots
    pub fn process(&mut self, bout: &Bout) {
        let Some(division) = bout.division.as_deref() else {
            self.skipped += 1;
            warn!(
                "Skipping {} vs {} on {}: no division label",
                bout.red, bout.blue, bout.date
            );
            return;
        };

        let red = self.ledger.get_or_init(&bout.red, division);
        let blue = self.ledger.get_or_init(&bout.blue, division);

        let expected_red = self.calculator.expected_score(red.rating, blue.rating);
        let expected_blue = self.calculator.expected_score(blue.rating, red.rating);
        let (actual_red, actual_blue) = actual_scores(bout.outcome);

        let k = self.calculator.fixed_k();

        let red_rating = self
            .calculator
            .updated_rating(red.rating, k, actual_red, expected_red);
        let blue_rating = self
            .calculator
            .updated_rating(blue.rating, k, actual_blue, expected_blue);

        self.ledger.update(&bout.red, division, red_rating, true);
        self.ledger.update(&bout.blue, division, blue_rating, true);

        self.snapshot(bout, &bout.red, division);
        self.snapshot(bout, &bout.blue, division);
    }

    /// Fold a whole pre-sorted bout sequence, in order
    pub fn process_all(&mut self, bouts: &[Bout]) {
        debug_assert!(bouts.windows(2).all(|pair| pair[0].date <= pair[1].date));

        for bout in bouts {
            self.process(bout);
        }
    }

    fn snapshot(&mut self, bout: &Bout, fighter: &str, division: &str) {
        let entry = self.ledger.get_or_init(fighter, division);
        self.history.push(DivisionSnapshot {
            date: bout.date,
            fighter: fighter.to_string(),
            division: division.to_string(),
            rating: entry.rating,
            bouts: entry.bouts,
        });
    }

    pub fn ledger(&self) -> &DivisionLedger {
        &self.ledger
    }

    pub fn history(&self) -> &[DivisionSnapshot] {
        &self.history
    }

    /// Bouts dropped for lack of a division label
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Consume the processor, yielding the final ledger and history log
    pub fn into_parts(self) -> (DivisionLedger, Vec<DivisionSnapshot>) {
        (self.ledger, self.history)
    }
}
