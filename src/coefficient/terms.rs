//! Built-in coefficient terms.
//!
//! # Categories
//!
//! - **Performance**: WIN_RATE, SCORING
//! - **Rating**: STARS
//! - **Commitment**: MENSALISTA
//! - **Season**: RANKING (gated by warm-up)
//!
//! # Score Convention
//! All terms return higher values for stronger players, roughly in 0..=1.

use super::{CoefficientTerm, SeasonContext};
use crate::config::DEFAULT_WARM_UP_DRAWS;
use crate::models::Participant;

/// Points awarded for a win, used to normalize ranking points.
pub const POINTS_PER_WIN: u32 = 3;

/// Wins per match played.
#[derive(Debug, Clone, Copy)]
pub struct WinRate;

impl CoefficientTerm for WinRate {
    fn name(&self) -> &'static str {
        "WIN_RATE"
    }

    fn evaluate(&self, participant: &Participant, _context: &SeasonContext) -> f64 {
        participant.stats.win_rate()
    }

    fn description(&self) -> &'static str {
        "Wins per match played"
    }
}

/// Goals plus assists per match played.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContribution;

impl CoefficientTerm for ScoringContribution {
    fn name(&self) -> &'static str {
        "SCORING"
    }

    fn evaluate(&self, participant: &Participant, _context: &SeasonContext) -> f64 {
        participant.stats.scoring_rate()
    }

    fn description(&self) -> &'static str {
        "Goals and assists per match played"
    }
}

/// Star rating, normalized to 0.2..=1.0.
///
/// Unrated participants count as neutral.
#[derive(Debug, Clone, Copy)]
pub struct StarRatingTerm;

impl CoefficientTerm for StarRatingTerm {
    fn name(&self) -> &'static str {
        "STARS"
    }

    fn evaluate(&self, participant: &Participant, _context: &SeasonContext) -> f64 {
        f64::from(participant.stars()) / 5.0
    }

    fn description(&self) -> &'static str {
        "Star rating"
    }
}

/// Flat bonus for monthly subscribers.
#[derive(Debug, Clone, Copy)]
pub struct MensalistaBonus;

impl CoefficientTerm for MensalistaBonus {
    fn name(&self) -> &'static str {
        "MENSALISTA"
    }

    fn evaluate(&self, participant: &Participant, _context: &SeasonContext) -> f64 {
        if participant.stats.mensalista {
            1.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Monthly subscriber bonus"
    }
}

/// Season ranking points, share of the points available so far.
///
/// Contributes 0.0 while fewer than `warm_up_draws` draws have been
/// published, and when the season has no matches yet.
#[derive(Debug, Clone, Copy)]
pub struct RankingPoints {
    /// Published draws required before the term counts.
    pub warm_up_draws: u32,
}

impl RankingPoints {
    /// Creates the term with a warm-up threshold.
    pub fn new(warm_up_draws: u32) -> Self {
        Self { warm_up_draws }
    }

    /// Whether the season is still warming up.
    #[inline]
    pub fn is_warming_up(&self, context: &SeasonContext) -> bool {
        context.draws_published() < self.warm_up_draws
    }
}

impl Default for RankingPoints {
    fn default() -> Self {
        Self::new(DEFAULT_WARM_UP_DRAWS)
    }
}

impl CoefficientTerm for RankingPoints {
    fn name(&self) -> &'static str {
        "RANKING"
    }

    fn evaluate(&self, participant: &Participant, context: &SeasonContext) -> f64 {
        if self.is_warming_up(context) || context.total_matches_in_season == 0 {
            return 0.0;
        }
        let available = f64::from(context.total_matches_in_season) * f64::from(POINTS_PER_WIN);
        f64::from(participant.stats.ranking_points) / available
    }

    fn description(&self) -> &'static str {
        "Season ranking points (after warm-up)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerStats;

    fn player(stats: PlayerStats) -> Participant {
        Participant::midfielder("p1").with_stats(stats)
    }

    #[test]
    fn test_win_rate() {
        let p = player(PlayerStats {
            wins: 3,
            matches_played: 4,
            ..Default::default()
        });
        let ctx = SeasonContext::new(10);
        assert!((WinRate.evaluate(&p, &ctx) - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_scoring() {
        let p = player(PlayerStats {
            goals: 3,
            assists: 1,
            matches_played: 8,
            ..Default::default()
        });
        let ctx = SeasonContext::new(10);
        assert!((ScoringContribution.evaluate(&p, &ctx) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_stars() {
        let ctx = SeasonContext::default();
        let rated = Participant::attacker("a").with_stars(5);
        let unrated = Participant::attacker("b");
        assert!((StarRatingTerm.evaluate(&rated, &ctx) - 1.0).abs() < 1e-10);
        assert!((StarRatingTerm.evaluate(&unrated, &ctx) - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_mensalista() {
        let ctx = SeasonContext::default();
        let m = Participant::defender("d").with_mensalista(true);
        let d = Participant::defender("e");
        assert!((MensalistaBonus.evaluate(&m, &ctx) - 1.0).abs() < 1e-10);
        assert!((MensalistaBonus.evaluate(&d, &ctx) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_ranking_gated_during_warm_up() {
        let term = RankingPoints::new(5);
        let p = Participant::attacker("a").with_ranking_points(30);

        let warming = SeasonContext::new(12).with_draws_published(4);
        assert!(term.is_warming_up(&warming));
        assert!((term.evaluate(&p, &warming) - 0.0).abs() < 1e-10);

        let unknown = SeasonContext::new(12);
        assert!((term.evaluate(&p, &unknown) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_ranking_after_warm_up() {
        let term = RankingPoints::new(5);
        let p = Participant::attacker("a").with_ranking_points(18);

        // Threshold reached: 18 / (12 * 3)
        let ctx = SeasonContext::new(12).with_draws_published(5);
        assert!((term.evaluate(&p, &ctx) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_ranking_without_matches() {
        let term = RankingPoints::new(0);
        let p = Participant::attacker("a").with_ranking_points(9);
        let ctx = SeasonContext::new(0).with_draws_published(3);
        assert!((term.evaluate(&p, &ctx) - 0.0).abs() < 1e-10);
    }
}
