//! Draft quality metrics.
//!
//! Computes how even a finished draft is, for showing next to the result
//! or comparing seeds.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Team strength | Sum and mean of player coefficients |
//! | Spread | Strongest mean minus weakest mean |
//! | Repeated pairings | Teammate pairs who also shared a team recently |

use serde::Serialize;

use super::DraftResult;
use crate::coefficient::{CoefficientEngine, SeasonContext};
use crate::models::PairingHistory;

/// Strength of one drafted team.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBalance {
    /// Team identifier.
    pub team_id: String,
    /// Number of players.
    pub size: usize,
    /// Number of goalkeepers.
    pub goalkeepers: usize,
    /// Sum of player coefficients.
    pub total_coefficient: f64,
    /// Mean player coefficient (0.0 for an empty team).
    pub avg_coefficient: f64,
}

/// Balance indicators for a draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBalance {
    /// Per-team strength, in draft order.
    pub teams: Vec<TeamBalance>,
    /// Strongest mean minus weakest mean.
    pub spread: f64,
    /// Teammate pairs who also played together recently.
    pub repeated_pairings: usize,
}

impl DraftBalance {
    /// Computes balance indicators for a draft.
    ///
    /// # Arguments
    /// * `result` - The finished draft.
    /// * `engine` - Engine used to score players (normally the allocator's).
    /// * `season` - Season context the draft ran with.
    /// * `pairs` - Recent pairings (see [`PairingHistory::from_recent`]).
    pub fn calculate(
        result: &DraftResult<'_>,
        engine: &CoefficientEngine,
        season: &SeasonContext,
        pairs: &PairingHistory,
    ) -> Self {
        let mut teams = Vec::with_capacity(result.teams.len());
        let mut repeated_pairings = 0;

        for roster in &result.teams {
            let total: f64 = roster
                .players
                .iter()
                .map(|p| engine.compute(p, season))
                .sum();
            let avg = if roster.is_empty() {
                0.0
            } else {
                total / roster.len() as f64
            };

            for (i, a) in roster.players.iter().enumerate() {
                for b in &roster.players[i + 1..] {
                    if pairs.played_together(&a.id, &b.id) {
                        repeated_pairings += 1;
                    }
                }
            }

            teams.push(TeamBalance {
                team_id: roster.team.id.clone(),
                size: roster.len(),
                goalkeepers: roster.goalkeeper_count(),
                total_coefficient: total,
                avg_coefficient: avg,
            });
        }

        let spread = if teams.is_empty() {
            0.0
        } else {
            let max = teams
                .iter()
                .map(|t| t.avg_coefficient)
                .fold(f64::MIN, f64::max);
            let min = teams
                .iter()
                .map(|t| t.avg_coefficient)
                .fold(f64::MAX, f64::min);
            max - min
        };

        Self {
            teams,
            spread,
            repeated_pairings,
        }
    }

    /// Whether the draft meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_spread: f64, max_repeated_pairings: usize) -> bool {
        self.spread <= max_spread && self.repeated_pairings <= max_repeated_pairings
    }

    /// Whether every team has a goalkeeper.
    pub fn all_teams_have_goalkeeper(&self) -> bool {
        self.teams.iter().all(|t| t.goalkeepers > 0)
    }
}
