//! Fixture (match schedule) model.
//!
//! A fixture is the ordered list of matches played in one session. Each
//! match borrows its two teams, so a match can never reference a team
//! that does not exist.

use serde::Serialize;
use std::collections::HashMap;

use super::Team;

/// One scheduled match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match<'a> {
    /// Position in the fixture (0-indexed).
    pub order: usize,
    /// Which repetition of the pairing cycle this match belongs to (0-indexed).
    pub round: usize,
    /// First team.
    pub home: &'a Team,
    /// Second team.
    pub away: &'a Team,
    /// Slot duration (minutes).
    pub tempo: u32,
    /// Kick-off, in minutes from the session start.
    pub starts_at_minute: u32,
}

impl<'a> Match<'a> {
    /// Creates a match.
    pub fn new(order: usize, home: &'a Team, away: &'a Team, tempo: u32) -> Self {
        Self {
            order,
            round: 0,
            home,
            away,
            tempo,
            starts_at_minute: 0,
        }
    }

    /// Sets the pairing cycle index.
    pub fn with_round(mut self, round: usize) -> Self {
        self.round = round;
        self
    }

    /// Sets the kick-off minute.
    pub fn starting_at(mut self, minute: u32) -> Self {
        self.starts_at_minute = minute;
        self
    }

    /// Minute at which the slot ends.
    #[inline]
    pub fn ends_at_minute(&self) -> u32 {
        self.starts_at_minute + self.tempo
    }

    /// Whether a team plays in this match.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home.id == team_id || self.away.id == team_id
    }
}

/// An ordered match schedule for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture<'a> {
    /// Matches in playing order.
    pub matches: Vec<Match<'a>>,
    /// Session budget the fixture was built for (minutes).
    pub total_session_minutes: u32,
}

impl<'a> Fixture<'a> {
    /// Creates an empty fixture for a session budget.
    pub fn new(total_session_minutes: u32) -> Self {
        Self {
            matches: Vec::new(),
            total_session_minutes,
        }
    }

    /// Appends a match.
    pub fn add_match(&mut self, m: Match<'a>) {
        self.matches.push(m);
    }

    /// Sum of all match slots (minutes).
    pub fn total_tempo(&self) -> u32 {
        self.matches.iter().map(|m| m.tempo).sum()
    }

    /// Unused session time (minutes).
    pub fn idle_minutes(&self) -> u32 {
        self.total_session_minutes.saturating_sub(self.total_tempo())
    }

    /// Whether the fixture fits its session budget.
    pub fn fits_budget(&self) -> bool {
        self.total_tempo() <= self.total_session_minutes
    }

    /// Matches a team plays in.
    pub fn matches_for_team(&self, team_id: &str) -> Vec<&Match<'a>> {
        self.matches.iter().filter(|m| m.involves(team_id)).collect()
    }

    /// Number of matches per team ID.
    pub fn matches_per_team(&self) -> HashMap<&'a str, usize> {
        let mut counts: HashMap<&'a str, usize> = HashMap::new();
        for m in &self.matches {
            *counts.entry(m.home.id.as_str()).or_insert(0) += 1;
            *counts.entry(m.away.id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match was scheduled.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        vec![Team::new("A"), Team::new("B"), Team::new("C")]
    }

    fn sample_fixture(teams: &[Team]) -> Fixture<'_> {
        let mut f = Fixture::new(50);
        f.add_match(Match::new(0, &teams[0], &teams[1], 15).starting_at(0));
        f.add_match(Match::new(1, &teams[0], &teams[2], 15).starting_at(15));
        f.add_match(Match::new(2, &teams[1], &teams[2], 15).starting_at(30));
        f
    }

    #[test]
    fn test_fixture_totals() {
        let teams = teams();
        let f = sample_fixture(&teams);
        assert_eq!(f.len(), 3);
        assert_eq!(f.total_tempo(), 45);
        assert_eq!(f.idle_minutes(), 5);
        assert!(f.fits_budget());
    }

    #[test]
    fn test_matches_for_team() {
        let teams = teams();
        let f = sample_fixture(&teams);
        assert_eq!(f.matches_for_team("A").len(), 2);
        assert_eq!(f.matches_for_team("Z").len(), 0);

        let counts = f.matches_per_team();
        assert_eq!(counts["A"], 2);
        assert_eq!(counts["B"], 2);
        assert_eq!(counts["C"], 2);
    }

    #[test]
    fn test_match_window() {
        let teams = teams();
        let m = Match::new(3, &teams[1], &teams[2], 12)
            .with_round(1)
            .starting_at(36);
        assert_eq!(m.ends_at_minute(), 48);
        assert_eq!(m.round, 1);
        assert!(m.involves("B"));
        assert!(!m.involves("A"));
    }

    #[test]
    fn test_empty_fixture() {
        let f = Fixture::new(90);
        assert!(f.is_empty());
        assert_eq!(f.total_tempo(), 0);
        assert!(f.fits_budget());
    }

    #[test]
    fn test_over_budget_detected() {
        let teams = teams();
        let mut f = Fixture::new(20);
        f.add_match(Match::new(0, &teams[0], &teams[1], 15));
        f.add_match(Match::new(1, &teams[0], &teams[2], 15).starting_at(15));
        assert!(!f.fits_budget());
        assert_eq!(f.idle_minutes(), 0);
    }
}
