//! Serpentine (snake) pick order across teams.
//!
//! Picks go 1→N, then N→1, repeating, so the team that picked last in one
//! pass picks first in the next.

/// Cursor over the serpentine pick order.
#[derive(Debug, Clone)]
pub(crate) struct SerpentineCursor {
    team_count: usize,
    step: usize,
}

impl SerpentineCursor {
    /// Starts at the first pick.
    pub(crate) fn new(team_count: usize) -> Self {
        Self {
            team_count,
            step: 0,
        }
    }

    fn team_at(&self, step: usize) -> usize {
        let n = self.team_count;
        let pos = step % (2 * n);
        if pos < n {
            pos
        } else {
            2 * n - 1 - pos
        }
    }

    /// Advances to the next team that still has room.
    ///
    /// Returns `None` only when every team is full (or there are no teams).
    pub(crate) fn next_open(&mut self, sizes: &[usize], capacities: &[usize]) -> Option<usize> {
        if self.team_count == 0 {
            return None;
        }
        for _ in 0..(2 * self.team_count) {
            let team = self.team_at(self.step);
            self.step += 1;
            if sizes[team] < capacities[team] {
                return Some(team);
            }
        }
        None
    }
}
