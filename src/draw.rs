//! One-shot draw: draft plus optional fixture.
//!
//! Mirrors the `POST /draw` contract so a web layer only has to
//! deserialize the body, call [`run_draw`] and serialize the outcome (or
//! an [`ErrorBody`](crate::error::ErrorBody)).
//!
//! ```
//! use racha_draft::config::DrawConfig;
//! use racha_draft::draw::{run_draw, DrawRequest};
//!
//! let body = r#"{
//!     "participants": [
//!         { "id": "g1", "position": "GOL" },
//!         { "id": "g2", "position": "GOL" },
//!         { "id": "a1", "position": "ATA" },
//!         { "id": "a2", "position": "ATA" }
//!     ],
//!     "teams": [{ "id": "t1", "nome": "Azul" }, { "id": "t2", "nome": "Branco" }],
//!     "options": {
//!         "playersPerTeam": 2,
//!         "seed": 7,
//!         "schedule": { "totalSessionMinutes": 60, "matchDurationMinutes": 15 }
//!     }
//! }"#;
//! let request: DrawRequest = serde_json::from_str(body).unwrap();
//! let response = run_draw(&request, &DrawConfig::default()).unwrap();
//! assert_eq!(response.teams.len(), 2);
//! assert_eq!(response.fixture.as_ref().map(|f| f.len()), Some(4));
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::allocator::{DraftBalance, DraftOptions, TeamAllocator};
use crate::coefficient::SeasonContext;
use crate::config::DrawConfig;
use crate::error::DrawError;
use crate::models::{Fixture, HistoryEntry, Participant, Team, TeamRoster};
use crate::scheduler::{FixtureScheduler, PairingOrder, ScheduleRequest};

/// Seed used when the request does not carry one.
pub const DEFAULT_SEED: u64 = 0;

/// Fixture part of a draw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOptions {
    /// Whole session length (minutes).
    pub total_session_minutes: u32,
    /// Length of one match slot (minutes).
    pub match_duration_minutes: u32,
    /// Use circle-method rounds instead of sequential pairings.
    #[serde(default)]
    pub circle: bool,
}

/// Numeric options and history of a draw request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawOptions {
    /// Requested players per team.
    pub players_per_team: usize,
    /// Matches played so far in the season.
    #[serde(default)]
    pub total_matches_in_season: u32,
    /// Draws already published this season.
    #[serde(default)]
    pub draws_published_in_season: Option<u32>,
    /// Past draws.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Tie-break seed; [`DEFAULT_SEED`] when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Build a fixture as well.
    #[serde(default)]
    pub schedule: Option<ScheduleOptions>,
}

impl DrawOptions {
    /// Allocator options for this request.
    pub fn draft_options(&self) -> DraftOptions {
        DraftOptions {
            season: SeasonContext {
                total_matches_in_season: self.total_matches_in_season,
                draws_published_in_season: self.draws_published_in_season,
            },
            history: self.history.clone(),
            players_per_team: self.players_per_team,
        }
    }
}

/// Body of a draw request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRequest {
    /// Confirmed players.
    pub participants: Vec<Participant>,
    /// Teams to fill (no players yet).
    pub teams: Vec<Team>,
    /// Options and history.
    pub options: DrawOptions,
}

/// Successful draw.
#[derive(Debug, Clone, Serialize)]
pub struct DrawResponse<'a> {
    /// Drafted teams.
    pub teams: Vec<TeamRoster<'a>>,
    /// Match fixture, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture: Option<Fixture<'a>>,
    /// Balance indicators of the draft.
    pub balance: DraftBalance,
}

/// Runs the draft and, if requested, the fixture.
///
/// All or nothing: if the fixture cannot be built the draft is discarded
/// too.
pub fn run_draw<'a>(
    request: &'a DrawRequest,
    config: &DrawConfig,
) -> Result<DrawResponse<'a>, DrawError> {
    let allocator = TeamAllocator::from_config(config);
    let options = request.options.draft_options();
    let seed = request.options.seed.unwrap_or(DEFAULT_SEED);

    let draft =
        allocator.draft_teams_seeded(&request.participants, &request.teams, &options, seed)?;

    let fixture = match request.options.schedule {
        Some(schedule) => {
            let order = if schedule.circle {
                PairingOrder::Circle
            } else {
                PairingOrder::Sequential
            };
            let fixture = FixtureScheduler::new().with_order(order).build_schedule(
                draft.team_refs(),
                &ScheduleRequest::new(
                    schedule.total_session_minutes,
                    schedule.match_duration_minutes,
                ),
            )?;
            Some(fixture)
        }
        None => None,
    };

    let balance = allocator.balance(&draft, &options);
    info!(
        "draw complete: {} teams, spread {:.4}, {} repeated pairing(s)",
        draft.teams.len(),
        balance.spread,
        balance.repeated_pairings
    );

    Ok(DrawResponse {
        teams: draft.teams,
        fixture,
        balance,
    })
}
