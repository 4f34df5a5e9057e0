//! Error types for drafting and scheduling.
//!
//! Messages are user-facing: the calling layer shows them verbatim to the
//! admin who ran the draw.

use serde::Serialize;
use thiserror::Error;

/// Errors returned by the allocator and the scheduler.
///
/// Both operations fail atomically: on error no roster or fixture is
/// produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Fewer goalkeepers than teams.
    #[error("Goleiros insuficientes: {goalkeepers} goleiro(s) para {teams} time(s)")]
    InsufficientGoalkeepers { goalkeepers: usize, teams: usize },

    /// Inputs or numeric options are unusable.
    #[error("Configuração inválida: {message}")]
    InvalidConfiguration { message: String },
}

impl DrawError {
    /// Creates a configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        DrawError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Returns true if the draw lacked goalkeepers.
    pub fn is_insufficient_goalkeepers(&self) -> bool {
        matches!(self, DrawError::InsufficientGoalkeepers { .. })
    }

    /// Returns true if the inputs were rejected before any work started.
    pub fn is_configuration(&self) -> bool {
        matches!(self, DrawError::InvalidConfiguration { .. })
    }

    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawError::InsufficientGoalkeepers { .. } => "InsufficientGoalkeepers",
            DrawError::InvalidConfiguration { .. } => "InvalidConfiguration",
        }
    }
}

/// Wire body for a failed draw: `{ "error": { "kind", "message" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// The error payload.
    pub error: ErrorDetail,
}

/// Kind and message of a failed draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    /// Error kind (see [`DrawError::kind`]).
    pub kind: &'static str,
    /// User-facing message.
    pub message: String,
}

impl From<&DrawError> for ErrorBody {
    fn from(err: &DrawError) -> Self {
        Self {
            error: ErrorDetail {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Errors loading a [`DrawConfig`](crate::config::DrawConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid config JSON.
    #[error("failed to parse draw config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("invalid draw config: {message}")]
    Invalid { message: String },
}
