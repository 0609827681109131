//! Single-elimination bracket.
//!
//! Each round the remaining teams are paired in order, (0, 1), (2, 3), ...,
//! with a fresh random field for every match. If the round has an odd number
//! of teams the last one is set aside before pairing and advances without
//! playing; it leads the next round, followed by the match winners in the
//! order their matches were played.

use cricket_core::{
    validate_team_count, EventSink, Field, OutcomePredictor, SimError, SimEvent, Team,
};
use rand::RngCore;
use tracing::info;

use crate::match_runner::{MatchConfig, MatchRunner};
use crate::results::RoundReport;

/// Result of running the bracket to the end
#[derive(Debug, Clone)]
pub struct TournamentOutcome {
    pub champion: Team,
    pub rounds: Vec<RoundReport>,
}

/// Tournament state: the teams still alive and the rounds played so far
#[derive(Debug, Clone)]
pub struct Bracket {
    teams: Vec<Team>,
    round: u32,
    runner: MatchRunner,
}

impl Bracket {
    /// Start a bracket. Between 2 and 12 teams may enter.
    pub fn new(teams: Vec<Team>, config: MatchConfig) -> Result<Self, SimError> {
        validate_team_count(teams.len())?;
        Ok(Self {
            teams,
            round: 0,
            runner: MatchRunner::new(config),
        })
    }

    /// Teams still in the tournament, in bracket order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Rounds played so far
    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    pub fn is_finished(&self) -> bool {
        self.teams.len() <= 1
    }

    /// Play the next round. Returns `None` once a single team is left.
    pub fn play_round(
        &mut self,
        predictor: &mut dyn OutcomePredictor,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Option<RoundReport> {
        if self.is_finished() {
            return None;
        }
        self.round += 1;
        let round = self.round;
        let mut teams = std::mem::take(&mut self.teams);

        sink.emit(SimEvent::RoundStarted {
            round,
            teams: teams.iter().map(|t| t.name().to_string()).collect(),
        });

        let mut next_round = Vec::with_capacity(teams.len() / 2 + 1);
        let bye = if teams.len() % 2 == 1 { teams.pop() } else { None };
        let bye_name = bye.as_ref().map(|t| t.name().to_string());
        if let Some(team) = bye {
            info!(round, team = team.name(), "bye");
            sink.emit(SimEvent::Bye {
                round,
                team: team.name().to_string(),
            });
            next_round.push(team);
        }

        let mut matches = Vec::with_capacity(teams.len() / 2);
        let mut pairs = teams.into_iter();
        while let (Some(team1), Some(team2)) = (pairs.next(), pairs.next()) {
            let field = Field::random(rng);
            let outcome = self.runner.play(team1, team2, field, predictor, rng, sink);
            next_round.push(outcome.winner);
            matches.push(outcome.report);
        }

        info!(
            round,
            matches = matches.len(),
            remaining = next_round.len(),
            "round complete"
        );
        self.teams = next_round;

        Some(RoundReport {
            round,
            bye: bye_name,
            matches,
        })
    }

    /// Play rounds until one team remains.
    pub fn run(
        mut self,
        predictor: &mut dyn OutcomePredictor,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> TournamentOutcome {
        let mut rounds = Vec::new();
        while let Some(report) = self.play_round(predictor, rng, sink) {
            rounds.push(report);
        }

        let champion = self
            .teams
            .pop()
            .expect("a bracket of two or more teams always leaves a champion");
        info!(champion = champion.name(), rounds = self.round, "tournament complete");
        sink.emit(SimEvent::TournamentEnded {
            champion: champion.name().to_string(),
            rounds: self.round,
        });

        TournamentOutcome { champion, rounds }
    }
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
