//! Balanced team draft and fixture scheduling for racha (pickup football).
//!
//! Splits the confirmed players of a session into balanced teams and
//! builds the order of matches that fits the session.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `Team`, `TeamRoster`,
//!   `HistoryEntry`, `Match`, `Fixture`
//! - **`coefficient`**: Weighted player strength (`CoefficientEngine`)
//! - **`allocator`**: Goalkeeper-first serpentine draft with anti-clique
//!   rules (`TeamAllocator`)
//! - **`scheduler`**: Round-robin fixtures inside a session budget
//!   (`FixtureScheduler`)
//! - **`draw`**: Draft plus fixture in one call, in the `/draw` wire shape
//! - **`config`**: Tunable weights and thresholds (`DrawConfig`)
//! - **`validation`**: Input integrity checks (duplicate IDs, team counts,
//!   durations)
//! - **`error`**: `DrawError` and its serialized body
//!
//! # Determinism
//!
//! Every random choice comes from a caller-supplied RNG or seed. The same
//! input with the same seed always yields the same draw.
//!
//! # References
//!
//! - Brams & Taylor (1996), "Fair Division", Ch. 3 (balanced alternation)
//! - Berger (1899), round-robin pairing tables

pub mod allocator;
pub mod coefficient;
pub mod config;
pub mod draw;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use allocator::{DraftOptions, DraftResult, TeamAllocator};
pub use coefficient::CoefficientEngine;
pub use config::DrawConfig;
pub use draw::{run_draw, DrawRequest, DrawResponse};
pub use error::DrawError;
pub use scheduler::FixtureScheduler;
