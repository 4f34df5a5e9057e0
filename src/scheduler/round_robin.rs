//! Round-robin fixture builder.
//!
//! # Algorithm
//!
//! 1. Build one cycle of pairings in which every pair of teams meets once.
//! 2. Repeat the cycle, appending matches while the next slot still fits
//!    the session budget.
//!
//! # Complexity
//! O(t² + m) where t=teams, m=matches emitted.

use log::info;

use crate::error::DrawError;
use crate::models::{Fixture, Match, Team};
use crate::validation::{first_error, validate_schedule_input};

/// Input container for scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRequest {
    /// Whole session length (minutes).
    pub total_session_minutes: u32,
    /// Length of one match slot (minutes).
    pub match_duration_minutes: u32,
}

impl ScheduleRequest {
    /// Creates a schedule request.
    pub fn new(total_session_minutes: u32, match_duration_minutes: u32) -> Self {
        Self {
            total_session_minutes,
            match_duration_minutes,
        }
    }

    /// How many slots fit the session.
    pub fn slot_count(&self) -> u32 {
        self.total_session_minutes
            .checked_div(self.match_duration_minutes)
            .unwrap_or(0)
    }
}

/// Order in which pairings are played within one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairingOrder {
    /// 1v2, 1v3, …, 2v3, … (lexicographic by team position).
    #[default]
    Sequential,
    /// Circle method: rounds in which no team plays twice.
    Circle,
}

impl PairingOrder {
    /// One cycle of pairings as team index pairs.
    pub fn pairings(&self, team_count: usize) -> Vec<(usize, usize)> {
        match self {
            PairingOrder::Sequential => sequential_pairings(team_count),
            PairingOrder::Circle => circle_pairings(team_count),
        }
    }
}

fn sequential_pairings(team_count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for home in 0..team_count {
        for away in (home + 1)..team_count {
            pairs.push((home, away));
        }
    }
    pairs
}

/// Berger circle method. Odd team counts get a bye slot.
fn circle_pairings(team_count: usize) -> Vec<(usize, usize)> {
    if team_count < 2 {
        return Vec::new();
    }
    let slots = team_count + team_count % 2;
    let bye = slots - 1;
    let has_bye = team_count % 2 == 1;
    let mut others: Vec<usize> = (1..slots).collect();

    let mut pairs = Vec::new();
    for _ in 0..(slots - 1) {
        let mut arrangement = Vec::with_capacity(slots);
        arrangement.push(0);
        arrangement.extend_from_slice(&others);

        for k in 0..(slots / 2) {
            let (a, b) = (arrangement[k], arrangement[slots - 1 - k]);
            if has_bye && (a == bye || b == bye) {
                continue;
            }
            pairs.push((a.min(b), a.max(b)));
        }
        others.rotate_right(1);
    }
    pairs
}

/// Builds round-robin fixtures inside a session budget.
///
/// # Example
///
/// ```
/// use racha_draft::scheduler::{FixtureScheduler, ScheduleRequest};
/// use racha_draft::models::Team;
///
/// let teams = vec![Team::new("A"), Team::new("B"), Team::new("C")];
/// let fixture = FixtureScheduler::new()
///     .build_schedule(&teams, &ScheduleRequest::new(90, 15))
///     .unwrap();
///
/// assert_eq!(fixture.len(), 6);
/// assert_eq!(fixture.matches[0].tempo, 15);
/// assert!(fixture.total_tempo() <= 90);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureScheduler {
    order: PairingOrder,
}

impl FixtureScheduler {
    /// Creates a scheduler with sequential pairing order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pairing order.
    pub fn with_order(mut self, order: PairingOrder) -> Self {
        self.order = order;
        self
    }

    /// Builds the fixture.
    ///
    /// # Errors
    /// [`DrawError::InvalidConfiguration`] with fewer than two teams,
    /// duplicate team IDs, a zero duration, or a match longer than the
    /// session.
    pub fn build_schedule<'a, I>(
        &self,
        teams: I,
        request: &ScheduleRequest,
    ) -> Result<Fixture<'a>, DrawError>
    where
        I: IntoIterator<Item = &'a Team>,
    {
        let teams: Vec<&'a Team> = teams.into_iter().collect();
        first_error(validate_schedule_input(
            &teams,
            request.total_session_minutes,
            request.match_duration_minutes,
        ))?;

        let duration = request.match_duration_minutes;
        let budget = request.total_session_minutes;
        let pairs = self.order.pairings(teams.len());

        let mut fixture = Fixture::new(budget);
        let mut elapsed: u32 = 0;
        let mut round = 0;
        'cycles: loop {
            for &(home, away) in &pairs {
                match elapsed.checked_add(duration) {
                    Some(end) if end <= budget => {}
                    _ => break 'cycles,
                }
                let order = fixture.len();
                fixture.add_match(
                    Match::new(order, teams[home], teams[away], duration)
                        .with_round(round)
                        .starting_at(elapsed),
                );
                elapsed += duration;
            }
            round += 1;
        }

        info!(
            "scheduled {} matches of {} min for {} teams ({} of {} min used)",
            fixture.len(),
            duration,
            teams.len(),
            fixture.total_tempo(),
            budget
        );
        Ok(fixture)
    }
}
