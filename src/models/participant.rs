//! Participant (player) model.
//!
//! A participant is a confirmed player available for a draw. Participants
//! are read-only inputs: the allocator hands back references to them and
//! never mutates or copies them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Neutral star value used when a participant has never been rated.
pub const NEUTRAL_STARS: u8 = 3;

/// Playing position.
///
/// Serialized with the short position codes used by the admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Goleiro.
    #[serde(rename = "GOL", alias = "GOALKEEPER")]
    Goalkeeper,
    /// Zagueiro.
    #[serde(rename = "ZAG", alias = "DEFENDER")]
    Defender,
    /// Meio-campo.
    #[serde(rename = "MEI", alias = "MIDFIELDER")]
    Midfielder,
    /// Atacante.
    #[serde(rename = "ATA", alias = "ATTACKER")]
    Attacker,
}

impl Position {
    /// All positions, in draft order. The allocator buckets players in
    /// this order, so goalkeepers must stay first.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Attacker,
    ];

    /// Short position code (GOL/ZAG/MEI/ATA).
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GOL",
            Position::Defender => "ZAG",
            Position::Midfielder => "MEI",
            Position::Attacker => "ATA",
        }
    }

    /// Whether this is the goalkeeper position.
    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }
}

/// Season performance counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    /// Season ranking points.
    pub ranking_points: u32,
    /// Matches won.
    pub wins: u32,
    /// Goals scored.
    pub goals: u32,
    /// Assists given.
    pub assists: u32,
    /// Matches played.
    pub matches_played: u32,
    /// Monthly subscriber ("mensalista").
    pub mensalista: bool,
}

impl PlayerStats {
    /// Wins per match played (0.0 with no matches).
    pub fn win_rate(&self) -> f64 {
        if self.matches_played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.matches_played)
    }

    /// Goals plus assists per match played (0.0 with no matches).
    pub fn scoring_rate(&self) -> f64 {
        if self.matches_played == 0 {
            return 0.0;
        }
        (f64::from(self.goals) + f64::from(self.assists)) / f64::from(self.matches_played)
    }
}

/// A 1-5 star rating and who set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRating {
    /// Star value (1..=5).
    pub stars: u8,
    /// Who set the rating.
    #[serde(default)]
    pub rated_by: Option<String>,
    /// When the rating was set.
    #[serde(default)]
    pub rated_at: Option<DateTime<Utc>>,
}

impl StarRating {
    /// Creates a rating, clamping the value into 1..=5.
    pub fn new(stars: u8) -> Self {
        Self {
            stars: stars.clamp(1, 5),
            rated_by: None,
            rated_at: None,
        }
    }

    /// Records who set the rating and when.
    pub fn with_provenance(mut self, rated_by: impl Into<String>, rated_at: DateTime<Utc>) -> Self {
        self.rated_by = Some(rated_by.into());
        self.rated_at = Some(rated_at);
        self
    }

    /// Star value clamped to 1..=5, tolerating out-of-range deserialized input.
    #[inline]
    pub fn clamped_stars(&self) -> u8 {
        self.stars.clamp(1, 5)
    }
}

/// A candidate player for the draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique participant identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Photo reference (URL or storage key).
    #[serde(default)]
    pub photo: Option<String>,
    /// Playing position.
    pub position: Position,
    /// Season performance.
    #[serde(default)]
    pub stats: PlayerStats,
    /// Star rating, if any.
    #[serde(default)]
    pub rating: Option<StarRating>,
}

impl Participant {
    /// Creates a participant with the given ID and position.
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            slug: String::new(),
            photo: None,
            position,
            stats: PlayerStats::default(),
            rating: None,
        }
    }

    /// Creates a goalkeeper.
    pub fn goalkeeper(id: impl Into<String>) -> Self {
        Self::new(id, Position::Goalkeeper)
    }

    /// Creates a defender.
    pub fn defender(id: impl Into<String>) -> Self {
        Self::new(id, Position::Defender)
    }

    /// Creates a midfielder.
    pub fn midfielder(id: impl Into<String>) -> Self {
        Self::new(id, Position::Midfielder)
    }

    /// Creates an attacker.
    pub fn attacker(id: impl Into<String>) -> Self {
        Self::new(id, Position::Attacker)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the photo reference.
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Sets the season stats.
    pub fn with_stats(mut self, stats: PlayerStats) -> Self {
        self.stats = stats;
        self
    }

    /// Sets the season ranking points.
    pub fn with_ranking_points(mut self, points: u32) -> Self {
        self.stats.ranking_points = points;
        self
    }

    /// Marks the participant as a monthly subscriber.
    pub fn with_mensalista(mut self, mensalista: bool) -> Self {
        self.stats.mensalista = mensalista;
        self
    }

    /// Sets the star rating.
    pub fn with_rating(mut self, rating: StarRating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets a star rating without provenance.
    pub fn with_stars(self, stars: u8) -> Self {
        self.with_rating(StarRating::new(stars))
    }

    /// Effective star value (neutral when unrated).
    pub fn stars(&self) -> u8 {
        self.rating
            .as_ref()
            .map(StarRating::clamped_stars)
            .unwrap_or(NEUTRAL_STARS)
    }

    /// Whether this participant plays in goal.
    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }
}
