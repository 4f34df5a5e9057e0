//! Input validation for draws and fixtures.
//!
//! Checks structural integrity of the inputs before any allocation or
//! scheduling work. Detects:
//! - Duplicate participant or team IDs
//! - An empty team list
//! - A zero players-per-team option
//! - Unusable fixture durations
//!
//! Every problem found is reported, not just the first.

use crate::error::DrawError;
use crate::models::{Participant, Team};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// No teams were supplied.
    NoTeams,
    /// Fewer than two teams for a fixture.
    TooFewTeams,
    /// Players-per-team is zero.
    InvalidTeamSize,
    /// A duration is zero or does not fit the session.
    InvalidDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for DrawError {
    fn from(err: ValidationError) -> Self {
        DrawError::invalid(err.message)
    }
}

/// Collapses a validation result into the first error, as a [`DrawError`].
pub fn first_error(result: ValidationResult) -> Result<(), DrawError> {
    result.map_err(|errors| {
        errors
            .into_iter()
            .next()
            .map(DrawError::from)
            .unwrap_or_else(|| DrawError::invalid("entrada inválida"))
    })
}

/// Validates the inputs of a draft.
///
/// Checks:
/// 1. At least one team
/// 2. Players-per-team greater than zero
/// 3. No duplicate team IDs
/// 4. No duplicate participant IDs
pub fn validate_draft_input(
    participants: &[Participant],
    teams: &[Team],
    players_per_team: usize,
) -> ValidationResult {
    let mut errors = Vec::new();

    if teams.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTeams,
            "nenhum time informado",
        ));
    }

    if players_per_team == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTeamSize,
            "jogadores por time deve ser maior que zero",
        ));
    }

    check_team_ids(teams, &mut errors);

    let mut participant_ids = HashSet::new();
    for p in participants {
        if !participant_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("jogador duplicado: {}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the inputs of a fixture.
///
/// Checks:
/// 1. At least two teams
/// 2. No duplicate team IDs
/// 3. Session and match durations greater than zero
/// 4. At least one match fits the session
pub fn validate_schedule_input(
    teams: &[&Team],
    total_session_minutes: u32,
    match_duration_minutes: u32,
) -> ValidationResult {
    let mut errors = Vec::new();

    if teams.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewTeams,
            format!(
                "são necessários pelo menos 2 times para montar a tabela, recebidos {}",
                teams.len()
            ),
        ));
    }

    check_team_ids(teams.iter().copied(), &mut errors);

    if total_session_minutes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            "duração total da sessão deve ser maior que zero",
        ));
    }
    if match_duration_minutes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            "duração da partida deve ser maior que zero",
        ));
    } else if match_duration_minutes > total_session_minutes && total_session_minutes > 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            format!(
                "partida de {match_duration_minutes} min não cabe em sessão de {total_session_minutes} min"
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_team_ids<'a>(
    teams: impl IntoIterator<Item = &'a Team>,
    errors: &mut Vec<ValidationError>,
) {
    let mut team_ids = HashSet::new();
    for t in teams {
        if !team_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("time duplicado: {}", t.id),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_teams() -> Vec<Team> {
        vec![Team::new("t1").with_name("Azul"), Team::new("t2").with_name("Branco")]
    }

    fn sample_participants() -> Vec<Participant> {
        vec![
            Participant::goalkeeper("g1"),
            Participant::goalkeeper("g2"),
            Participant::defender("d1"),
            Participant::attacker("a1"),
        ]
    }

    #[test]
    fn test_valid_draft_input() {
        assert!(validate_draft_input(&sample_participants(), &sample_teams(), 2).is_ok());
    }

    #[test]
    fn test_no_teams() {
        let errors = validate_draft_input(&sample_participants(), &[], 2).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::NoTeams));
    }

    #[test]
    fn test_zero_players_per_team() {
        let errors =
            validate_draft_input(&sample_participants(), &sample_teams(), 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTeamSize));
    }

    #[test]
    fn test_duplicate_participant_id() {
        let mut participants = sample_participants();
        participants.push(Participant::midfielder("d1"));

        let errors = validate_draft_input(&participants, &sample_teams(), 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("jogador")));
    }

    #[test]
    fn test_duplicate_team_id() {
        let teams = vec![Team::new("t1"), Team::new("t1")];
        let errors = validate_draft_input(&sample_participants(), &teams, 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("time")));
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_draft_input(&sample_participants(), &[], 0).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_first_error_becomes_configuration_error() {
        let result = validate_draft_input(&sample_participants(), &[], 0);
        let err = first_error(result).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("nenhum time"));
    }

    #[test]
    fn test_valid_schedule_input() {
        let teams = sample_teams();
        let refs: Vec<&Team> = teams.iter().collect();
        assert!(validate_schedule_input(&refs, 90, 15).is_ok());
        assert!(validate_schedule_input(&refs, 15, 15).is_ok());
    }

    #[test]
    fn test_schedule_needs_two_teams() {
        let teams = sample_teams();
        let refs = vec![&teams[0]];
        let errors = validate_schedule_input(&refs, 90, 15).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooFewTeams));
    }

    #[test]
    fn test_schedule_durations() {
        let teams = sample_teams();
        let refs: Vec<&Team> = teams.iter().collect();

        let errors = validate_schedule_input(&refs, 0, 0).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidDuration)
                .count(),
            2
        );

        let errors = validate_schedule_input(&refs, 10, 15).unwrap_err();
        assert!(errors[0].message.contains("não cabe"));
    }

    #[test]
    fn test_schedule_duplicate_team() {
        let teams = sample_teams();
        let refs = vec![&teams[0], &teams[0]];
        let errors = validate_schedule_input(&refs, 90, 15).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }
}
