//! Tournament configuration.
//!
//! Values come from defaults, an optional TOML file, and command-line
//! overrides, in that order. Nothing is clamped: out-of-range values are
//! reported by [`TournamentConfig::validate`].

use cricket_core::{validate_team_count, SimError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::match_runner::MatchConfig;

/// Squad size used when nothing else is configured.
pub const DEFAULT_PLAYERS_PER_TEAM: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SimError),

    #[error("players per team must be at least 1, got {0}")]
    InvalidPlayersPerTeam(usize),

    #[error("{team_count} teams of {players_per_team} players is too many to build")]
    RosterTooLarge {
        team_count: usize,
        players_per_team: usize,
    },

    #[error("not enough {kind} names: need {needed}, have {available}")]
    NamePoolTooSmall {
        kind: &'static str,
        needed: usize,
        available: usize,
    },
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Teams entering the bracket (2..=12)
    pub team_count: usize,
    /// Overs per innings (2..=20)
    pub total_overs: u32,
    /// Players on every roster
    pub players_per_team: usize,
    /// Seed for the random generator (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            team_count: 4,
            total_overs: 5,
            players_per_team: DEFAULT_PLAYERS_PER_TEAM,
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check every value is within range
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_team_count(self.team_count)?;
        MatchConfig::new(self.total_overs)?;
        if self.players_per_team == 0 {
            return Err(ConfigError::InvalidPlayersPerTeam(self.players_per_team));
        }
        roster_size(self.team_count, self.players_per_team)?;
        Ok(())
    }

    /// Match settings derived from this config
    pub fn match_config(&self) -> Result<MatchConfig, ConfigError> {
        Ok(MatchConfig::new(self.total_overs)?)
    }
}

/// Total players needed for `team_count` squads.
pub(crate) fn roster_size(
    team_count: usize,
    players_per_team: usize,
) -> Result<usize, ConfigError> {
    team_count
        .checked_mul(players_per_team)
        .ok_or(ConfigError::RosterTooLarge {
            team_count,
            players_per_team,
        })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
