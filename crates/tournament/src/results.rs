//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::TournamentConfig;
use crate::match_runner::MatchReport;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid results JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One round of the bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number
    pub round: u32,
    /// Team that advanced without playing, if the round was odd-sized
    pub bye: Option<String>,
    /// Matches in pairing order
    pub matches: Vec<MatchReport>,
}

impl RoundReport {
    /// Teams that go through to the next round, in next-round order
    pub fn advancing(&self) -> Vec<&str> {
        self.bye
            .iter()
            .map(String::as_str)
            .chain(self.matches.iter().map(|m| m.winner.as_str()))
            .collect()
    }
}

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Configuration used
    pub config: TournamentConfig,
    /// Participating teams in bracket order
    pub participants: Vec<String>,
    /// Every round, first to last
    pub rounds: Vec<RoundReport>,
    /// Last team standing
    pub champion: String,
}

impl TournamentResults {
    pub fn new(
        config: TournamentConfig,
        participants: Vec<String>,
        rounds: Vec<RoundReport>,
        champion: &str,
    ) -> Self {
        Self {
            config,
            participants,
            rounds,
            champion: champion.to_string(),
        }
    }

    /// Total matches played across all rounds
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ResultsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ResultsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Knockout Tournament ===\n\n");
        report.push_str(&format!("Teams: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} teams, {} overs/innings, {} players/team\n\n",
            self.config.team_count, self.config.total_overs, self.config.players_per_team
        ));

        for round in &self.rounds {
            report.push_str(&format!("Round {}:\n", round.round));
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>9} {:>9}  {:<20} {}\n",
                "Team 1", "Team 2", "Score 1", "Score 2", "Winner", "Decided by"
            ));
            report.push_str(&"-".repeat(100));
            report.push('\n');

            for m in &round.matches {
                report.push_str(&format!(
                    "{:<20} vs {:<20} {:>9} {:>9}  {:<20} {:?}\n",
                    m.team1,
                    m.team2,
                    format!("{}/{}", m.first_innings.runs, m.first_innings.wickets),
                    format!("{}/{}", m.second_innings.runs, m.second_innings.wickets),
                    m.winner,
                    m.decision
                ));
            }
            if let Some(bye) = &round.bye {
                report.push_str(&format!("{bye} advances on a bye\n"));
            }
            report.push('\n');
        }

        report.push_str(&format!("Champion: {}\n", self.champion));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
