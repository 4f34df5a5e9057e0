//! Draft and fixture domain models.
//!
//! Provides the data types the allocator and the scheduler work on.
//! Inputs (`Participant`, `Team`, `HistoryEntry`) are owned by the caller;
//! outputs (`TeamRoster`, `Match`, `Fixture`) borrow from them.
//!
//! # Glossary
//!
//! | Type | Racha term |
//! |------|-----------|
//! | Participant | Jogador confirmado |
//! | Team | Time |
//! | HistoryEntry | Sorteio anterior (histórico) |
//! | Match | Partida |
//! | Match::tempo | Tempo do jogo |

mod fixture;
mod history;
mod participant;
mod team;

pub use fixture::{Fixture, Match};
pub use history::{HistoryEntry, HistoryTeam, PairingHistory};
pub use participant::{Participant, PlayerStats, Position, StarRating, NEUTRAL_STARS};
pub use team::{Team, TeamRoster};
