//! Roster generation.
//!
//! Teams are drawn from name pools without replacement: no two players and
//! no two teams share a name within one tournament. Every rating is drawn
//! uniformly and rounded to one decimal place.

use cricket_core::{Player, Ratings, Team};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::collections::HashSet;
use std::path::Path;

use crate::config::{roster_size, ConfigError};

const FIRST_NAMES: [&str; 12] = [
    "Arjun", "Ben", "Chris", "Dinesh", "Ethan", "Faisal", "Graeme", "Hashim", "Imran", "Jason",
    "Kane", "Liam",
];

const SURNAMES: [&str; 12] = [
    "Ahmed", "Bell", "Clarke", "Dhawan", "Elgar", "Fernando", "Gayle", "Hussain", "Iyer",
    "Jadeja", "Khan", "Latham",
];

const TEAM_NAMES: [&str; 14] = [
    "Afghanistan",
    "Australia",
    "Bangladesh",
    "England",
    "India",
    "Ireland",
    "Netherlands",
    "New Zealand",
    "Pakistan",
    "Scotland",
    "South Africa",
    "Sri Lanka",
    "West Indies",
    "Zimbabwe",
];

/// A list of distinct names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Build a pool from names, dropping blanks and repeats (first one wins).
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty() && seen.insert(n.clone()))
            .collect();
        Self { names }
    }

    /// One name per line.
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Load a newline-separated name file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(&contents))
    }

    /// Built-in player names, enough for the largest bracket.
    pub fn default_players() -> Self {
        Self::new(
            FIRST_NAMES
                .iter()
                .flat_map(|first| SURNAMES.iter().map(move |last| format!("{first} {last}"))),
        )
    }

    /// Built-in team names.
    pub fn default_teams() -> Self {
        Self::new(TEAM_NAMES)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Draw `count` distinct names.
    fn draw(
        &self,
        kind: &'static str,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, ConfigError> {
        if count > self.names.len() {
            return Err(ConfigError::NamePoolTooSmall {
                kind,
                needed: count,
                available: self.names.len(),
            });
        }
        Ok(self.names.choose_multiple(rng, count).cloned().collect())
    }
}

/// Builds the teams for a tournament.
#[derive(Debug, Clone)]
pub struct RosterBuilder {
    player_names: NamePool,
    team_names: NamePool,
    players_per_team: usize,
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new(
            NamePool::default_players(),
            NamePool::default_teams(),
            crate::config::DEFAULT_PLAYERS_PER_TEAM,
        )
    }
}

impl RosterBuilder {
    pub fn new(player_names: NamePool, team_names: NamePool, players_per_team: usize) -> Self {
        Self {
            player_names,
            team_names,
            players_per_team,
        }
    }

    /// Create `team_count` teams of `players_per_team` players each.
    pub fn build(&self, team_count: usize, rng: &mut dyn RngCore) -> Result<Vec<Team>, ConfigError> {
        if self.players_per_team == 0 {
            return Err(ConfigError::InvalidPlayersPerTeam(0));
        }
        let needed = roster_size(team_count, self.players_per_team)?;
        let team_names = self.team_names.draw("team", team_count, rng)?;
        let player_names = self.player_names.draw("player", needed, rng)?;

        let mut teams = Vec::with_capacity(team_count);
        for (team_name, squad) in team_names
            .into_iter()
            .zip(player_names.chunks(self.players_per_team))
        {
            let roster = squad
                .iter()
                .map(|name| Player::new(name.as_str(), random_ratings(rng)))
                .collect::<Result<Vec<_>, _>>()?;
            teams.push(Team::new(team_name, roster)?);
        }
        Ok(teams)
    }
}

fn random_ratings(rng: &mut dyn RngCore) -> Ratings {
    let mut rating = || (rng.gen::<f64>() * 10.0).round() / 10.0;
    Ratings::new(rating(), rating(), rating(), rating(), rating())
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
