//! Elo update rule configuration

use serde::{Deserialize, Serialize};

/// Parameters of the Elo update rule
///
/// The experience schedule widens updates for fighters with short records:
/// below `novice_bout_cutoff` bouts the K-factor is scaled by
/// `novice_k_multiplier`, below `developing_bout_cutoff` by
/// `developing_k_multiplier`, and past that it is unscaled. The schedule
/// applies to the promotion-wide variant only; per-division processing uses
/// `k_base` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EloConfig {
    /// Baseline K-factor before any scaling
    pub k_base: f64,
    /// Rating assigned on a fighter's first appearance
    pub initial_rating: f64,
    /// Denominator of the logistic expected-score curve
    pub rating_scale: f64,
    /// Bout counts below this get the novice multiplier
    pub novice_bout_cutoff: u32,
    /// Bout counts below this (but at or above the novice cutoff) get the
    /// developing multiplier
    pub developing_bout_cutoff: u32,
    pub novice_k_multiplier: f64,
    pub developing_k_multiplier: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_base: 32.0,
            initial_rating: 1500.0,
            rating_scale: 400.0,
            novice_bout_cutoff: 5,
            developing_bout_cutoff: 20,
            novice_k_multiplier: 2.0,
            developing_k_multiplier: 1.5,
        }
    }
}

impl EloConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.k_base < 0.0 {
            return Err(crate::error::RatingError::ConfigurationError {
                message: "k_base must be non-negative".to_string(),
            }
            .into());
        }

        if self.rating_scale <= 0.0 {
            return Err(crate::error::RatingError::ConfigurationError {
                message: "rating_scale must be positive".to_string(),
            }
            .into());
        }

        if self.novice_bout_cutoff > self.developing_bout_cutoff {
            return Err(crate::error::RatingError::ConfigurationError {
                message: "novice_bout_cutoff cannot exceed developing_bout_cutoff".to_string(),
            }
            .into());
        }

        if self.novice_k_multiplier < 0.0 || self.developing_k_multiplier < 0.0 {
            return Err(crate::error::RatingError::ConfigurationError {
                message: "experience multipliers must be non-negative".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EloConfig::default();
        assert_eq!(config.k_base, 32.0);
        assert_eq!(config.initial_rating, 1500.0);
        assert_eq!(config.rating_scale, 400.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = EloConfig::default();
        config.rating_scale = 0.0;
        assert!(config.validate().is_err());

        config = EloConfig::default();
        config.k_base = -1.0;
        assert!(config.validate().is_err());

        config = EloConfig::default();
        config.novice_bout_cutoff = 30;
        assert!(config.validate().is_err());

        config = EloConfig::default();
        config.developing_k_multiplier = -0.5;
        assert!(config.validate().is_err());
    }
}
