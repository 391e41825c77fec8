//! Keyed rating state
//!
//! Ledgers hold the current rating and bout count per fighter (promotion-wide)
//! or per (fighter, division) pair. Entries are created lazily on first
//! reference and never removed; the ledger knows nothing about time or
//! processing order.

use crate::types::{Division, FighterId};
use std::collections::HashMap;

/// Current rating state for one ledger key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingEntry {
    pub rating: f64,
    /// Bouts folded into this entry so far
    pub bouts: u32,
}

impl RatingEntry {
    /// Fresh entry with no bouts on record
    pub fn new(rating: f64) -> Self {
        Self { rating, bouts: 0 }
    }
}

/// Promotion-wide ledger keyed by fighter name
#[derive(Debug)]
pub struct GlobalLedger {
    initial_rating: f64,
    entries: HashMap<FighterId, RatingEntry>,
}

impl GlobalLedger {
    pub fn new(initial_rating: f64) -> Self {
        Self {
            initial_rating,
            entries: HashMap::new(),
        }
    }

    fn entry_mut(&mut self, fighter: &str) -> &mut RatingEntry {
        let initial = self.initial_rating;
        self.entries
            .entry(fighter.to_string())
            .or_insert_with(|| RatingEntry::new(initial))
    }

    /// Return the entry for `fighter`, creating it at the initial rating on
    /// first reference. Repeated calls return the same stored entry.
    pub fn get_or_init(&mut self, fighter: &str) -> RatingEntry {
        *self.entry_mut(fighter)
    }

    /// Overwrite the stored rating, optionally advancing the bout count.
    /// Writes are never validated or rejected.
    pub fn update(&mut self, fighter: &str, new_rating: f64, increment_bouts: bool) {
        let entry = self.entry_mut(fighter);
        entry.rating = new_rating;
        if increment_bouts {
            entry.bouts += 1;
        }
    }

    /// Stored entry for `fighter`, if one has been created
    pub fn get(&self, fighter: &str) -> Option<RatingEntry> {
        self.entries.get(fighter).copied()
    }

    /// Every key ever touched, in arbitrary order
    pub fn entries(&self) -> impl Iterator<Item = (&FighterId, &RatingEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-division ledger keyed by (fighter name, division label)
///
/// Division labels are free text compared by exact equality; callers are
/// expected to have trimmed them.
#[derive(Debug)]
pub struct DivisionLedger {
    initial_rating: f64,
    entries: HashMap<FighterId, HashMap<Division, RatingEntry>>,
}

impl DivisionLedger {
    pub fn new(initial_rating: f64) -> Self {
        Self {
            initial_rating,
            entries: HashMap::new(),
        }
    }

    fn entry_mut(&mut self, fighter: &str, division: &str) -> &mut RatingEntry {
        let initial = self.initial_rating;
        let divisions = self.entries.entry(fighter.to_string()).or_default();

        // A fighter first seen in a new division starts from the mean of
        // their existing per-division ratings; with no record anywhere they
        // start at the initial rating.
        let prior = if divisions.is_empty() {
            initial
        } else {
            let sum: f64 = divisions.values().map(|e| e.rating).sum();
            sum / divisions.len() as f64
        };

        divisions
            .entry(division.to_string())
            .or_insert_with(|| RatingEntry::new(prior))
    }

    /// Return the entry for `fighter` in `division`, creating it per the
    /// cross-division prior rule on first reference.
    pub fn get_or_init(&mut self, fighter: &str, division: &str) -> RatingEntry {
        *self.entry_mut(fighter, division)
    }

    /// Overwrite the stored rating, optionally advancing the bout count.
    pub fn update(
        &mut self,
        fighter: &str,
        division: &str,
        new_rating: f64,
        increment_bouts: bool,
    ) {
        let entry = self.entry_mut(fighter, division);
        entry.rating = new_rating;
        if increment_bouts {
            entry.bouts += 1;
        }
    }

    /// Stored entry for `fighter` in `division`, if one has been created
    pub fn get(&self, fighter: &str, division: &str) -> Option<RatingEntry> {
        self.entries
            .get(fighter)
            .and_then(|divisions| divisions.get(division))
            .copied()
    }

    /// Every (fighter, division) key ever touched, in arbitrary order
    pub fn entries(&self) -> impl Iterator<Item = (&FighterId, &Division, &RatingEntry)> {
        self.entries.iter().flat_map(|(fighter, divisions)| {
            divisions
                .iter()
                .map(move |(division, entry)| (fighter, division, entry))
        })
    }

    /// Number of (fighter, division) pairs on record
    pub fn len(&self) -> usize {
        self.entries.values().map(|divisions| divisions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
