//! Errors raised while setting up a simulation.
//!
//! Once a match is underway nothing can fail: running out of batters is the
//! all-out condition, not an error.

use thiserror::Error;

/// Smallest bracket that still needs a match.
pub const MIN_TEAMS: usize = 2;
/// Largest bracket the simulator accepts.
pub const MAX_TEAMS: usize = 12;
/// Shortest match allowed, in overs per innings.
pub const MIN_OVERS: u32 = 2;
/// Longest match allowed, in overs per innings.
pub const MAX_OVERS: u32 = 20;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("team count must be between 2 and 12, got {0}")]
    InvalidTeamCount(usize),

    #[error("overs per innings must be between 2 and 20, got {0}")]
    InvalidOvers(u32),

    #[error("{attribute} rating for player {player} must be within [0, 1], got {value}")]
    RatingOutOfRange {
        player: String,
        attribute: &'static str,
        value: f64,
    },

    #[error("field {attribute} must be within [0, 1], got {value}")]
    FieldOutOfRange { attribute: &'static str, value: f64 },

    #[error("team {0} has no players")]
    EmptyRoster(String),
}

/// Check a bracket size before any team is built.
pub fn validate_team_count(count: usize) -> Result<(), SimError> {
    if (MIN_TEAMS..=MAX_TEAMS).contains(&count) {
        Ok(())
    } else {
        Err(SimError::InvalidTeamCount(count))
    }
}

/// Check an overs limit before any match is played.
pub fn validate_overs(overs: u32) -> Result<(), SimError> {
    if (MIN_OVERS..=MAX_OVERS).contains(&overs) {
        Ok(())
    } else {
        Err(SimError::InvalidOvers(overs))
    }
}
