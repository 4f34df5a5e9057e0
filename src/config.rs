//! Draw tunables.
//!
//! The warm-up threshold and the history lookback window are product
//! decisions, not algorithm constants, so they live here and are loaded
//! alongside the rest of the application config.
//!
//! ```
//! use racha_draft::config::DrawConfig;
//!
//! let config = DrawConfig::from_json_str(r#"{ "warmUpDraws": 4 }"#).unwrap();
//! assert_eq!(config.warm_up_draws, 4);
//! assert_eq!(config.history_lookback, 3);
//! ```

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::ConfigError;

/// Draws that must be published in a season before ranking points count.
pub const DEFAULT_WARM_UP_DRAWS: u32 = 5;

/// Recent draws consulted by the anti-clique rule.
pub const DEFAULT_HISTORY_LOOKBACK: usize = 3;

/// Weights of the coefficient terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoefficientWeights {
    /// Wins per match.
    pub win_rate: f64,
    /// Goals plus assists per match.
    pub scoring: f64,
    /// Star rating.
    pub star_rating: f64,
    /// Season ranking points (after warm-up).
    pub ranking: f64,
    /// Monthly subscriber bonus.
    pub mensalista: f64,
}

impl Default for CoefficientWeights {
    fn default() -> Self {
        Self {
            win_rate: 0.30,
            scoring: 0.20,
            star_rating: 0.30,
            ranking: 0.20,
            mensalista: 0.05,
        }
    }
}

impl CoefficientWeights {
    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("winRate", self.win_rate),
            ("scoring", self.scoring),
            ("starRating", self.star_rating),
            ("ranking", self.ranking),
            ("mensalista", self.mensalista),
        ]
    }
}

/// Final tie-break among participants with identical coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TieBreakRule {
    /// Random keys drawn from the injected generator.
    #[default]
    Seeded,
    /// Participant ID, lexicographic.
    ById,
    /// Display name, then ID.
    ByName,
}

/// Tunables for the coefficient engine and the allocator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawConfig {
    /// Published draws required before ranking points are weighted.
    pub warm_up_draws: u32,
    /// Number of most recent draws the anti-clique rule looks at.
    pub history_lookback: usize,
    /// Coefficient term weights.
    pub weights: CoefficientWeights,
    /// Tie-break among equal coefficients.
    pub tie_breaker: TieBreakRule,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            warm_up_draws: DEFAULT_WARM_UP_DRAWS,
            history_lookback: DEFAULT_HISTORY_LOOKBACK,
            weights: CoefficientWeights::default(),
            tie_breaker: TieBreakRule::default(),
        }
    }
}

impl DrawConfig {
    /// Sets the warm-up threshold.
    pub fn with_warm_up_draws(mut self, draws: u32) -> Self {
        self.warm_up_draws = draws;
        self
    }

    /// Sets the history lookback window.
    pub fn with_history_lookback(mut self, lookback: usize) -> Self {
        self.history_lookback = lookback;
        self
    }

    /// Sets the coefficient weights.
    pub fn with_weights(mut self, weights: CoefficientWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the tie-break rule.
    pub fn with_tie_breaker(mut self, rule: TieBreakRule) -> Self {
        self.tie_breaker = rule;
        self
    }

    /// Parses and validates a JSON document. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates JSON from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, weight) in self.weights.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Invalid {
                    message: format!("weight '{name}' must be a non-negative number, got {weight}"),
                });
            }
        }
        Ok(())
    }
}
