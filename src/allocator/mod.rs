//! Balanced team draft ("sorteio inteligente").
//!
//! # Algorithm
//!
//! 1. Validate inputs and require one goalkeeper per team.
//! 2. Compute every participant's coefficient.
//! 3. Bucket by position, strongest first; ties go to the [`TieBreaker`].
//! 4. Deal the best goalkeepers one per team.
//! 5. Deal defenders, midfielders, attackers and surplus goalkeepers in
//!    serpentine order, continuing from the goalkeeper pass.
//! 6. Anti-clique: when the serpentine target holds someone the player
//!    recently shared a team with, prefer an open team with fewer such
//!    pairings, or swap with a same-position player elsewhere.
//!
//! Team capacities are fixed up front (sizes differ by at most one, with
//! the remainder on the earliest teams), so the anti-clique rule can never
//! break team sizes or goalkeeper coverage.
//!
//! # Complexity
//! O(p log p + p * t * s) where p=participants, t=teams, s=team size.

mod balance;
mod serpentine;
mod tie_break;

pub use balance::{DraftBalance, TeamBalance};
pub use tie_break::TieBreaker;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::coefficient::{CoefficientEngine, SeasonContext};
use crate::config::DrawConfig;
use crate::error::DrawError;
use crate::models::{HistoryEntry, PairingHistory, Participant, Position, Team, TeamRoster};
use crate::validation::{first_error, validate_draft_input};
use serpentine::SerpentineCursor;

/// Options for one draft.
#[derive(Debug, Clone, Default)]
pub struct DraftOptions {
    /// Season state for coefficients.
    pub season: SeasonContext,
    /// Past draws, any order.
    pub history: Vec<HistoryEntry>,
    /// Requested players per team.
    pub players_per_team: usize,
}

impl DraftOptions {
    /// Creates options for the given team size.
    pub fn new(players_per_team: usize) -> Self {
        Self {
            players_per_team,
            ..Default::default()
        }
    }

    /// Sets the season context.
    pub fn with_season(mut self, season: SeasonContext) -> Self {
        self.season = season;
        self
    }

    /// Sets the draw history.
    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }
}

/// Teams with their drafted players.
#[derive(Debug, Clone, Serialize)]
pub struct DraftResult<'a> {
    /// One roster per input team, in input order.
    pub teams: Vec<TeamRoster<'a>>,
}

impl<'a> DraftResult<'a> {
    /// Total players placed.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(TeamRoster::len).sum()
    }

    /// Roster of a team.
    pub fn roster(&self, team_id: &str) -> Option<&TeamRoster<'a>> {
        self.teams.iter().find(|r| r.team.id == team_id)
    }

    /// Roster a participant was placed on.
    pub fn team_of(&self, participant_id: &str) -> Option<&TeamRoster<'a>> {
        self.teams.iter().find(|r| r.contains(participant_id))
    }

    /// Whether two participants ended up on the same team.
    pub fn same_team(&self, a: &str, b: &str) -> bool {
        match (self.team_of(a), self.team_of(b)) {
            (Some(x), Some(y)) => x.team.id == y.team.id,
            _ => false,
        }
    }

    /// The team identities, in input order.
    pub fn team_refs(&self) -> Vec<&'a Team> {
        self.teams.iter().map(|r| r.team).collect()
    }
}

/// Partitions participants into balanced teams.
///
/// # Example
///
/// ```
/// use racha_draft::allocator::{DraftOptions, TeamAllocator};
/// use racha_draft::models::{Participant, Team};
///
/// let players = vec![
///     Participant::goalkeeper("g1"),
///     Participant::goalkeeper("g2"),
///     Participant::defender("d1").with_stars(5),
///     Participant::defender("d2").with_stars(2),
/// ];
/// let teams = vec![Team::new("azul"), Team::new("branco")];
///
/// let allocator = TeamAllocator::new();
/// let result = allocator
///     .draft_teams_seeded(&players, &teams, &DraftOptions::new(2), 7)
///     .unwrap();
/// assert_eq!(result.player_count(), 4);
/// assert!(result.teams.iter().all(|r| r.goalkeeper_count() == 1));
/// ```
#[derive(Debug, Clone)]
pub struct TeamAllocator {
    engine: CoefficientEngine,
    tie_breaker: TieBreaker,
    history_lookback: usize,
}

impl TeamAllocator {
    /// Creates an allocator with the default config.
    pub fn new() -> Self {
        Self::from_config(&DrawConfig::default())
    }

    /// Creates an allocator from a config.
    pub fn from_config(config: &DrawConfig) -> Self {
        Self {
            engine: CoefficientEngine::from_config(config),
            tie_breaker: config.tie_breaker.into(),
            history_lookback: config.history_lookback,
        }
    }

    /// Replaces the coefficient engine.
    pub fn with_engine(mut self, engine: CoefficientEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sets how many recent draws the anti-clique rule considers.
    pub fn with_history_lookback(mut self, lookback: usize) -> Self {
        self.history_lookback = lookback;
        self
    }

    /// The coefficient engine in use.
    pub fn engine(&self) -> &CoefficientEngine {
        &self.engine
    }

    /// The anti-clique lookback window.
    pub fn history_lookback(&self) -> usize {
        self.history_lookback
    }

    /// Balance indicators of a draft made with these options.
    pub fn balance(&self, result: &DraftResult<'_>, options: &DraftOptions) -> DraftBalance {
        let pairs = PairingHistory::from_recent(&options.history, self.history_lookback);
        DraftBalance::calculate(result, &self.engine, &options.season, &pairs)
    }

    /// Drafts with a `StdRng` seeded from `seed`.
    pub fn draft_teams_seeded<'a>(
        &self,
        participants: &'a [Participant],
        teams: &'a [Team],
        options: &DraftOptions,
        seed: u64,
    ) -> Result<DraftResult<'a>, DrawError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.draft_teams(participants, teams, options, &mut rng)
    }

    /// Partitions participants into the given teams.
    ///
    /// # Errors
    /// - [`DrawError::InvalidConfiguration`] for an empty team list, zero
    ///   players-per-team, or duplicate IDs.
    /// - [`DrawError::InsufficientGoalkeepers`] when there are fewer
    ///   goalkeepers than teams.
    pub fn draft_teams<'a, R: Rng>(
        &self,
        participants: &'a [Participant],
        teams: &'a [Team],
        options: &DraftOptions,
        rng: &mut R,
    ) -> Result<DraftResult<'a>, DrawError> {
        first_error(validate_draft_input(
            participants,
            teams,
            options.players_per_team,
        ))?;

        let team_count = teams.len();
        let goalkeepers = participants.iter().filter(|p| p.is_goalkeeper()).count();
        if goalkeepers < team_count {
            warn!("draft rejected: {goalkeepers} goalkeeper(s) for {team_count} team(s)");
            return Err(DrawError::InsufficientGoalkeepers {
                goalkeepers,
                teams: team_count,
            });
        }

        let requested = options.players_per_team * team_count;
        if participants.len() != requested {
            warn!(
                "pool of {} players does not match {} x {} requested; sizes will differ by at most one",
                participants.len(),
                team_count,
                options.players_per_team
            );
        }

        let coefficients = self.engine.compute_all(participants, &options.season);
        let tie_keys: Vec<u64> = participants.iter().map(|_| rng.random()).collect();
        for (p, c) in participants.iter().zip(&coefficients) {
            debug!("coefficient {} ({}): {:.4}", p.id, p.position.code(), c);
        }

        let buckets = self.position_buckets(participants, &coefficients, &tie_keys);
        let pairs = PairingHistory::from_recent(&options.history, self.history_lookback);

        let mut draft = DraftState::new(participants, &coefficients, team_count, &pairs);
        let mut cursor = SerpentineCursor::new(team_count);

        // One goalkeeper per team, strongest to the first team
        let (starters, surplus) = buckets[0].split_at(team_count);
        for &idx in starters {
            let team = draft.next_open(&mut cursor)?;
            draft.assign(idx, team);
        }

        let queue = buckets[1..]
            .iter()
            .flat_map(|b| b.iter())
            .chain(surplus.iter())
            .copied();
        for idx in queue {
            let target = draft.next_open(&mut cursor)?;
            draft.place(idx, target);
        }

        if draft.unavoidable_conflicts > 0 {
            warn!(
                "{} recent pairing(s) could not be split up",
                draft.unavoidable_conflicts
            );
        }

        let result = DraftResult {
            teams: teams
                .iter()
                .zip(draft.rosters)
                .map(|(team, members)| TeamRoster {
                    team,
                    players: members.into_iter().map(|i| &participants[i]).collect(),
                })
                .collect(),
        };

        info!(
            "drafted {} players into {} teams (sizes {:?})",
            result.player_count(),
            team_count,
            result.teams.iter().map(TeamRoster::len).collect::<Vec<_>>()
        );
        Ok(result)
    }

    /// Participant indices per position, strongest first.
    fn position_buckets(
        &self,
        participants: &[Participant],
        coefficients: &[f64],
        tie_keys: &[u64],
    ) -> [Vec<usize>; 4] {
        let mut buckets: [Vec<usize>; 4] = Position::ALL.map(|position| {
            participants
                .iter()
                .enumerate()
                .filter(|(_, p)| p.position == position)
                .map(|(i, _)| i)
                .collect()
        });
        for bucket in &mut buckets {
            bucket.sort_by(|&a, &b| {
                coefficients[b]
                    .total_cmp(&coefficients[a])
                    .then_with(|| {
                        self.tie_breaker.compare(
                            &participants[a],
                            &participants[b],
                            tie_keys[a],
                            tie_keys[b],
                        )
                    })
                    .then_with(|| a.cmp(&b))
            });
        }
        buckets
    }
}

impl Default for TeamAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sizes for `total` players over `team_count` teams, remainder first.
pub fn team_capacities(total: usize, team_count: usize) -> Vec<usize> {
    if team_count == 0 {
        return Vec::new();
    }
    let base = total / team_count;
    let extra = total % team_count;
    (0..team_count)
        .map(|i| base + usize::from(i < extra))
        .collect()
}

/// Provisional rosters while the draft runs (participant indices).
struct DraftState<'p> {
    participants: &'p [Participant],
    coefficients: &'p [f64],
    pairs: &'p PairingHistory,
    rosters: Vec<Vec<usize>>,
    sizes: Vec<usize>,
    /// Sum of member coefficients per team.
    strength: Vec<f64>,
    capacities: Vec<usize>,
    unavoidable_conflicts: usize,
}

impl<'p> DraftState<'p> {
    fn new(
        participants: &'p [Participant],
        coefficients: &'p [f64],
        team_count: usize,
        pairs: &'p PairingHistory,
    ) -> Self {
        Self {
            participants,
            coefficients,
            pairs,
            rosters: vec![Vec::new(); team_count],
            sizes: vec![0; team_count],
            strength: vec![0.0; team_count],
            capacities: team_capacities(participants.len(), team_count),
            unavoidable_conflicts: 0,
        }
    }

    fn next_open(&self, cursor: &mut SerpentineCursor) -> Result<usize, DrawError> {
        cursor
            .next_open(&self.sizes, &self.capacities)
            .ok_or_else(|| DrawError::invalid("não há vaga disponível nos times"))
    }

    fn assign(&mut self, idx: usize, team: usize) {
        debug!("{} -> team #{}", self.participants[idx].id, team);
        self.rosters[team].push(idx);
        self.sizes[team] += 1;
        self.strength[team] += self.coefficients[idx];
    }

    /// Recent teammates of `idx` on `team`, ignoring `except`.
    fn conflicts(&self, idx: usize, team: usize, except: Option<usize>) -> usize {
        let id = &self.participants[idx].id;
        self.rosters[team]
            .iter()
            .filter(|&&other| Some(other) != except)
            .filter(|&&other| self.pairs.played_together(id, &self.participants[other].id))
            .count()
    }

    /// Places a participant at the serpentine target, or somewhere better.
    fn place(&mut self, idx: usize, target: usize) {
        let here = self.conflicts(idx, target, None);
        if here == 0 {
            self.assign(idx, target);
            return;
        }

        if let Some(team) = self.better_open_team(idx, here) {
            debug!(
                "anti-clique: {} moved from team #{} to team #{}",
                self.participants[idx].id, target, team
            );
            self.assign(idx, team);
            return;
        }

        if let Some((team, slot)) = self.best_swap(idx, target, here) {
            let displaced = self.rosters[team][slot];
            debug!(
                "anti-clique: {} swapped with {} (team #{} <-> team #{})",
                self.participants[idx].id, self.participants[displaced].id, target, team
            );
            self.rosters[team][slot] = idx;
            self.strength[team] += self.coefficients[idx] - self.coefficients[displaced];
            self.assign(displaced, target);
            return;
        }

        self.unavoidable_conflicts += here;
        self.assign(idx, target);
    }

    /// Open team with the fewest conflicts, if strictly fewer than `limit`.
    ///
    /// Ties prefer the smaller roster, then the weaker team, then the
    /// earlier team.
    fn better_open_team(&self, idx: usize, limit: usize) -> Option<usize> {
        (0..self.rosters.len())
            .filter(|&t| self.sizes[t] < self.capacities[t])
            .map(|t| (self.conflicts(idx, t, None), t))
            .filter(|&(c, _)| c < limit)
            .min_by(|&(ca, a), &(cb, b)| {
                ca.cmp(&cb)
                    .then_with(|| self.sizes[a].cmp(&self.sizes[b]))
                    .then_with(|| self.strength[a].total_cmp(&self.strength[b]))
                    .then_with(|| a.cmp(&b))
            })
            .map(|(_, t)| t)
    }

    /// Same-position swap that strictly lowers the total conflicts.
    ///
    /// `idx` takes the slot of a player on another team, who moves to
    /// `target` instead. Sizes and positions are unchanged by the swap.
    fn best_swap(&self, idx: usize, target: usize, here: usize) -> Option<(usize, usize)> {
        let position = self.participants[idx].position;
        let mut best: Option<(usize, usize, usize)> = None;

        for team in (0..self.rosters.len()).filter(|&t| t != target) {
            for (slot, &other) in self.rosters[team].iter().enumerate() {
                if self.participants[other].position != position {
                    continue;
                }
                let before = here + self.conflicts(other, team, Some(other));
                let after =
                    self.conflicts(idx, team, Some(other)) + self.conflicts(other, target, None);
                if after < before && best.map_or(true, |(cost, _, _)| after < cost) {
                    best = Some((after, team, slot));
                }
            }
        }

        best.map(|(_, team, slot)| (team, slot))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn pool(goalkeepers: usize, outfield: &[(u8, u8)]) -> Vec<Participant> {
        let mut players: Vec<Participant> = (0..goalkeepers)
            .map(|i| Participant::goalkeeper(format!("g{i}")).with_stars(5 - (i % 5) as u8))
            .collect();
        for (i, &(pos, stars)) in outfield.iter().enumerate() {
            let position = match pos % 3 {
                0 => Position::Defender,
                1 => Position::Midfielder,
                _ => Position::Attacker,
            };
            players.push(Participant::new(format!("p{i}"), position).with_stars(stars));
        }
        players
    }

    proptest! {
        /// Property: every participant lands on exactly one team
        #[test]
        fn prop_every_participant_placed_once(
            team_count in 2usize..6,
            extra_keepers in 0usize..3,
            outfield in prop::collection::vec((0u8..3, 1u8..=5), 0..24),
            seed in any::<u64>()
        ) {
            let teams: Vec<Team> = (0..team_count).map(|i| Team::new(format!("t{i}"))).collect();
            let players = pool(team_count + extra_keepers, &outfield);
            let options = DraftOptions::new(3);
            let result = TeamAllocator::new()
                .draft_teams_seeded(&players, &teams, &options, seed)
                .unwrap();

            prop_assert_eq!(result.player_count(), players.len());
            let placed: HashSet<&str> = result
                .teams
                .iter()
                .flat_map(|r| r.players.iter().map(|p| p.id.as_str()))
                .collect();
            prop_assert_eq!(placed.len(), players.len());
        }

        /// Property: each team has a goalkeeper and sizes differ by at most one
        #[test]
        fn prop_goalkeepers_and_sizes(
            team_count in 2usize..6,
            extra_keepers in 0usize..4,
            outfield in prop::collection::vec((0u8..3, 1u8..=5), 0..24),
            seed in any::<u64>()
        ) {
            let teams: Vec<Team> = (0..team_count).map(|i| Team::new(format!("t{i}"))).collect();
            let players = pool(team_count + extra_keepers, &outfield);
            let result = TeamAllocator::new()
                .draft_teams_seeded(&players, &teams, &DraftOptions::new(4), seed)
                .unwrap();

            prop_assert!(result.teams.iter().all(|r| r.goalkeeper_count() >= 1));
            let sizes: Vec<usize> = result.teams.iter().map(|r| r.len()).collect();
            prop_assert_eq!(sizes, team_capacities(players.len(), team_count));
        }

        /// Property: fewer goalkeepers than teams always fails
        #[test]
        fn prop_short_on_goalkeepers(
            team_count in 2usize..6,
            outfield in prop::collection::vec((0u8..3, 1u8..=5), 0..12),
            seed in any::<u64>()
        ) {
            let teams: Vec<Team> = (0..team_count).map(|i| Team::new(format!("t{i}"))).collect();
            let players = pool(team_count - 1, &outfield);
            let err = TeamAllocator::new()
                .draft_teams_seeded(&players, &teams, &DraftOptions::new(4), seed)
                .unwrap_err();
            prop_assert!(err.is_insufficient_goalkeepers());
        }
    }
}
