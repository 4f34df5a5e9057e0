//! Skill coefficients for the draft.
//!
//! A participant's coefficient is a weighted sum of independent terms
//! (win rate, scoring, star rating, subscriber bonus, ranking points).
//! Each term is a [`CoefficientTerm`]; the [`CoefficientEngine`] combines
//! them.
//!
//! # Usage
//!
//! ```
//! use racha_draft::coefficient::{CoefficientEngine, SeasonContext};
//! use racha_draft::config::DrawConfig;
//! use racha_draft::models::Participant;
//!
//! let engine = CoefficientEngine::from_config(&DrawConfig::default());
//! let context = SeasonContext::new(12).with_draws_published(9);
//!
//! let strong = Participant::attacker("a1").with_stars(5);
//! let weak = Participant::attacker("a2").with_stars(1);
//! assert!(engine.compute(&strong, &context) > engine.compute(&weak, &context));
//! ```
//!
//! # Ranking warm-up
//!
//! Early in a season ranking points mostly reflect who showed up first, so
//! [`terms::RankingPoints`] contributes nothing until enough draws have
//! been published.

mod engine;
pub mod terms;

pub use engine::CoefficientEngine;

use crate::models::Participant;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Season state a coefficient is computed against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonContext {
    /// Matches played so far in the season.
    pub total_matches_in_season: u32,
    /// Draws already published this season. `None` counts as zero.
    #[serde(default)]
    pub draws_published_in_season: Option<u32>,
}

impl SeasonContext {
    /// Creates a context for a season with the given match count.
    pub fn new(total_matches_in_season: u32) -> Self {
        Self {
            total_matches_in_season,
            draws_published_in_season: None,
        }
    }

    /// Sets the number of published draws.
    pub fn with_draws_published(mut self, draws: u32) -> Self {
        self.draws_published_in_season = Some(draws);
        self
    }

    /// Published draws, treating unknown as zero.
    #[inline]
    pub fn draws_published(&self) -> u32 {
        self.draws_published_in_season.unwrap_or(0)
    }
}

/// One ingredient of the coefficient.
///
/// # Score Convention
/// **Higher value = stronger player.** Terms should return values roughly
/// in 0.0..=1.0 so that weights stay comparable.
pub trait CoefficientTerm: Send + Sync + Debug {
    /// Term name (e.g., "WIN_RATE").
    fn name(&self) -> &'static str;

    /// Evaluates the term for a participant in a season.
    fn evaluate(&self, participant: &Participant, context: &SeasonContext) -> f64;

    /// Term description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = SeasonContext::new(12);
        assert_eq!(ctx.total_matches_in_season, 12);
        assert_eq!(ctx.draws_published(), 0);
        assert_eq!(ctx.with_draws_published(4).draws_published(), 4);
    }

    #[test]
    fn test_context_from_json() {
        let ctx: SeasonContext =
            serde_json::from_str(r#"{ "totalMatchesInSeason": 12 }"#).unwrap();
        assert_eq!(ctx.draws_published_in_season, None);
    }
}
