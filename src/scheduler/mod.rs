//! Match fixture scheduling.
//!
//! Turns drafted teams into an ordered list of matches that fits one
//! session.
//!
//! # Algorithm
//!
//! `FixtureScheduler` repeats a round-robin cycle of pairings and stops
//! before the next match would overrun the session budget. Two cycle
//! orders are available: sequential (1v2, 1v3, 2v3, …) and the circle
//! method, which keeps any team from playing twice in the same round.
//!
//! # References
//!
//! - Berger (1899), round-robin pairing tables
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

mod round_robin;

pub use round_robin::{FixtureScheduler, PairingOrder, ScheduleRequest};
