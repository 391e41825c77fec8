//! Elo update rule
//!
//! Expected scores follow the standard logistic curve on the rating gap.
//! The K-factor for the promotion-wide variant scales with a fighter's
//! experience and with how the bout ended; the per-division variant uses the
//! base K untouched.

use crate::config::EloConfig;
use crate::types::{FinishMethod, Outcome};

/// Expected score of a fighter rated `rating` against `opponent`
///
/// `scale` is the logistic denominator (400 for classic Elo). The two
/// perspectives of one bout are algebraically complementary.
pub fn expected_score(rating: f64, opponent: f64, scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / scale))
}

/// Actual scores (red, blue) awarded for a bout outcome
pub fn actual_scores(outcome: Outcome) -> (f64, f64) {
    match outcome {
        Outcome::RedWin => (1.0, 0.0),
        Outcome::BlueWin => (0.0, 1.0),
        Outcome::DrawOrOther => (0.5, 0.5),
    }
}

/// K-factor multiplier for a finish method
///
/// Total over the enum; `Overturned` freezes the bout's rating movement
/// entirely, and `Other` doubles as the bucket for missing labels.
pub fn method_multiplier(method: FinishMethod) -> f64 {
    match method {
        FinishMethod::KoTko | FinishMethod::Submission => 1.2,
        FinishMethod::UnanimousDecision => 0.9,
        FinishMethod::SplitDecision => 0.7,
        FinishMethod::MajorityDecision => 0.8,
        FinishMethod::Disqualification => 0.5,
        FinishMethod::Overturned => 0.0,
        FinishMethod::Other => 0.8,
    }
}

/// Elo calculator carrying a validated configuration
#[derive(Debug, Clone)]
pub struct EloCalculator {
    config: EloConfig,
}

impl EloCalculator {
    /// Create a new calculator, validating the configuration
    pub fn new(config: EloConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &EloConfig {
        &self.config
    }

    /// Rating assigned on a first appearance
    pub fn initial_rating(&self) -> f64 {
        self.config.initial_rating
    }

    /// Expected score under the configured rating scale
    pub fn expected_score(&self, rating: f64, opponent: f64) -> f64 {
        expected_score(rating, opponent, self.config.rating_scale)
    }

    /// Experience multiplier from a fighter's pre-bout count
    pub fn experience_multiplier(&self, bouts: u32) -> f64 {
        if bouts < self.config.novice_bout_cutoff {
            self.config.novice_k_multiplier
        } else if bouts < self.config.developing_bout_cutoff {
            self.config.developing_k_multiplier
        } else {
            1.0
        }
    }

    /// Per-side K-factor for the promotion-wide variant
    ///
    /// `bouts` is that side's pre-bout count; the method component is shared
    /// by both sides of a bout.
    pub fn scaled_k(&self, bouts: u32, method: FinishMethod) -> f64 {
        self.config.k_base * self.experience_multiplier(bouts) * method_multiplier(method)
    }

    /// K-factor for the per-division variant: the base K, unscaled
    pub fn fixed_k(&self) -> f64 {
        self.config.k_base
    }

    /// Post-bout rating for one side
    pub fn updated_rating(&self, rating: f64, k: f64, actual: f64, expected: f64) -> f64 {
        rating + k * (actual - expected)
    }
}
