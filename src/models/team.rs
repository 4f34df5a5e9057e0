//! Team and roster models.
//!
//! A `Team` is the identity supplied by the caller for one draw (id, name,
//! logo). A `TeamRoster` pairs that identity with the participants the
//! allocator placed on it. Rosters borrow both; nothing is copied.

use serde::{Deserialize, Serialize};

use super::{Participant, Position};

/// A team slot for one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Display name.
    #[serde(rename = "nome", alias = "name", default)]
    pub name: String,
    /// Logo reference.
    #[serde(default)]
    pub logo: Option<String>,
}

impl Team {
    /// Creates a team with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            logo: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the logo reference.
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}

/// A team with its drafted players.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRoster<'a> {
    /// The team identity.
    #[serde(flatten)]
    pub team: &'a Team,
    /// Drafted players, in placement order.
    #[serde(rename = "jogadores")]
    pub players: Vec<&'a Participant>,
}

impl<'a> TeamRoster<'a> {
    /// Creates an empty roster for a team.
    pub fn new(team: &'a Team) -> Self {
        Self {
            team,
            players: Vec::new(),
        }
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Number of players at a position.
    pub fn count_position(&self, position: Position) -> usize {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .count()
    }

    /// Number of goalkeepers.
    pub fn goalkeeper_count(&self) -> usize {
        self.count_position(Position::Goalkeeper)
    }

    /// Whether a participant is on this roster.
    pub fn contains(&self, participant_id: &str) -> bool {
        self.players.iter().any(|p| p.id == participant_id)
    }

    /// Participant IDs, in placement order.
    pub fn player_ids(&self) -> Vec<&'a str> {
        self.players.iter().map(|p| p.id.as_str()).collect()
    }
}
