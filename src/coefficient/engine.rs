//! Weighted combination of coefficient terms.

use std::sync::Arc;

use super::terms::{MensalistaBonus, RankingPoints, ScoringContribution, StarRatingTerm, WinRate};
use super::{CoefficientTerm, SeasonContext};
use crate::config::DrawConfig;
use crate::models::Participant;

#[derive(Clone)]
struct WeightedTerm {
    term: Arc<dyn CoefficientTerm>,
    weight: f64,
}

/// Computes participant coefficients as a weighted sum of terms.
///
/// Pure: the same participant and context always give the same value.
///
/// # Example
/// ```
/// use racha_draft::coefficient::{CoefficientEngine, SeasonContext};
/// use racha_draft::coefficient::terms;
/// use racha_draft::models::Participant;
///
/// let engine = CoefficientEngine::new()
///     .with_term(terms::StarRatingTerm, 1.0)
///     .with_term(terms::RankingPoints::new(3), 0.5);
///
/// let ctx = SeasonContext::new(12).with_draws_published(1);
/// let p = Participant::defender("d1").with_stars(5).with_ranking_points(20);
/// assert!((engine.compute(&p, &ctx) - 1.0).abs() < 1e-10);
/// ```
#[derive(Clone)]
pub struct CoefficientEngine {
    terms: Vec<WeightedTerm>,
}

impl CoefficientEngine {
    /// Creates an engine with no terms.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Builds the standard engine from configured weights and warm-up.
    pub fn from_config(config: &DrawConfig) -> Self {
        let w = &config.weights;
        Self::new()
            .with_term(WinRate, w.win_rate)
            .with_term(ScoringContribution, w.scoring)
            .with_term(StarRatingTerm, w.star_rating)
            .with_term(MensalistaBonus, w.mensalista)
            .with_term(RankingPoints::new(config.warm_up_draws), w.ranking)
    }

    /// Adds a weighted term.
    pub fn with_term<T: CoefficientTerm + 'static>(mut self, term: T, weight: f64) -> Self {
        self.terms.push(WeightedTerm {
            term: Arc::new(term),
            weight,
        });
        self
    }

    /// Coefficient of a participant.
    pub fn compute(&self, participant: &Participant, context: &SeasonContext) -> f64 {
        self.terms
            .iter()
            .map(|wt| wt.term.evaluate(participant, context) * wt.weight)
            .sum()
    }

    /// Coefficients of many participants, in input order.
    pub fn compute_all(&self, participants: &[Participant], context: &SeasonContext) -> Vec<f64> {
        participants
            .iter()
            .map(|p| self.compute(p, context))
            .collect()
    }

    /// Weighted contribution of each term, for inspecting a draw.
    pub fn breakdown(
        &self,
        participant: &Participant,
        context: &SeasonContext,
    ) -> Vec<(&'static str, f64)> {
        self.terms
            .iter()
            .map(|wt| {
                (
                    wt.term.name(),
                    wt.term.evaluate(participant, context) * wt.weight,
                )
            })
            .collect()
    }

    /// Number of terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

impl Default for CoefficientEngine {
    fn default() -> Self {
        Self::from_config(&DrawConfig::default())
    }
}

impl std::fmt::Debug for CoefficientEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoefficientEngine")
            .field(
                "terms",
                &self
                    .terms
                    .iter()
                    .map(|t| format!("{}(w={})", t.term.name(), t.weight))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
