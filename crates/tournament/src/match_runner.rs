//! Match runner for playing a two-innings match between teams

use cricket_core::{
    validate_overs, Decision, EventSink, Field, Innings, InningsSummary, OutcomePredictor,
    Scoreboard, SimError, SimEvent, Team,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Overs per innings
    total_overs: u32,
}

impl MatchConfig {
    /// Create a config, rejecting overs outside 2..=20
    pub fn new(total_overs: u32) -> Result<Self, SimError> {
        validate_overs(total_overs)?;
        Ok(Self { total_overs })
    }

    pub fn total_overs(&self) -> u32 {
        self.total_overs
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { total_overs: 5 }
    }
}

/// Which innings a team batted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

/// Everything worth keeping about a finished match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub team1: String,
    pub team2: String,
    pub captain1: String,
    pub captain2: String,
    pub field: Field,
    pub first_innings: InningsSummary,
    pub second_innings: InningsSummary,
    pub winner: String,
    pub winning_score: u32,
    pub decision: Decision,
}

impl MatchReport {
    /// Whether both sides finished on the same number of runs
    pub fn is_tie(&self) -> bool {
        self.first_innings.runs == self.second_innings.runs
    }

    pub fn loser(&self) -> &str {
        if self.winner == self.team1 {
            &self.team2
        } else {
            &self.team1
        }
    }

    /// Runs separating the two sides
    pub fn margin(&self) -> u32 {
        self.first_innings.runs.abs_diff(self.second_innings.runs)
    }
}

/// A played match: the team that goes through plus the report
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub winner: Team,
    pub report: MatchReport,
}

/// Decide a match from its two innings.
///
/// More runs wins. With runs level the side that lost fewer wickets wins, and
/// if that is level too the side batting second goes through.
pub fn decide(first: &InningsSummary, second: &InningsSummary) -> (Side, Decision) {
    if first.runs != second.runs {
        let side = if first.runs > second.runs {
            Side::First
        } else {
            Side::Second
        };
        return (side, Decision::Runs);
    }
    if first.wickets != second.wickets {
        let side = if first.wickets < second.wickets {
            Side::First
        } else {
            Side::Second
        };
        return (side, Decision::WicketsInHand);
    }
    (Side::Second, Decision::ChasingSide)
}

/// Runs matches between two teams
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play a match; `team1` bats first.
    ///
    /// Both teams are consumed and the winner is handed back.
    pub fn play(
        &self,
        mut team1: Team,
        mut team2: Team,
        field: Field,
        predictor: &mut dyn OutcomePredictor,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> MatchOutcome {
        let captain1 = team1.select_captain(rng).name().to_string();
        let captain2 = team2.select_captain(rng).name().to_string();
        for team in [&mut team1, &mut team2] {
            team.reset_batting_order();
            team.reset_bowler_pool();
        }

        sink.emit(SimEvent::MatchStarted {
            team1: team1.name().to_string(),
            team2: team2.name().to_string(),
            captain1: captain1.clone(),
            captain2: captain2.clone(),
            total_overs: self.config.total_overs,
            field,
        });

        let mut scoreboard = Scoreboard::new();
        let first_innings = Innings::new(&mut team1, &team2, &field, self.config.total_overs)
            .play(&mut scoreboard, predictor, rng, sink);

        scoreboard.reset();
        let second_innings = Innings::new(&mut team2, &team1, &field, self.config.total_overs)
            .play(&mut scoreboard, predictor, rng, sink);

        let (side, decision) = decide(&first_innings, &second_innings);
        let (winner, winning_score) = match side {
            Side::First => (team1, first_innings.runs),
            Side::Second => (team2, second_innings.runs),
        };

        debug!(
            winner = winner.name(),
            winning_score,
            ?decision,
            predictor = predictor.name(),
            "match decided"
        );
        sink.emit(SimEvent::MatchEnded {
            winner: winner.name().to_string(),
            score: winning_score,
            decision,
        });

        let report = MatchReport {
            team1: first_innings.batting_team.clone(),
            team2: second_innings.batting_team.clone(),
            captain1,
            captain2,
            field,
            first_innings,
            second_innings,
            winner: winner.name().to_string(),
            winning_score,
            decision,
        };
        MatchOutcome { winner, report }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
