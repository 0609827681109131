//! Structured event feed.
//!
//! The simulator never formats text. Every boundary (ball, over, innings,
//! match, round, tournament) is reported as a [`SimEvent`] handed to an
//! [`EventSink`]; rendering commentary is up to the sink.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::innings::InningsSummary;
use crate::scoreboard::Scoreboard;

/// What happened on one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallOutcome {
    Out,
    Runs(u8),
}

/// How a match winner was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// One side scored more runs.
    Runs,
    /// Runs level; the side that lost fewer wickets goes through.
    WicketsInHand,
    /// Runs and wickets level; the side batting second goes through.
    ChasingSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    RoundStarted {
        round: u32,
        teams: Vec<String>,
    },
    Bye {
        round: u32,
        team: String,
    },
    MatchStarted {
        team1: String,
        team2: String,
        captain1: String,
        captain2: String,
        total_overs: u32,
        field: Field,
    },
    InningsStarted {
        batting: String,
        bowling: String,
        opener: String,
        bowler: String,
    },
    Ball {
        /// 1-based position within the current over.
        ball: u32,
        batter: String,
        bowler: String,
        outcome: BallOutcome,
        score: Scoreboard,
    },
    NewBatter {
        name: String,
        score: Scoreboard,
    },
    OverCompleted {
        over: u32,
        score: Scoreboard,
        /// `None` when the over was the last of the innings.
        next_bowler: Option<String>,
    },
    InningsEnded(InningsSummary),
    MatchEnded {
        winner: String,
        score: u32,
        decision: Decision,
    },
    TournamentEnded {
        champion: String,
        rounds: u32,
    },
}

/// Receives the event feed.
pub trait EventSink {
    fn emit(&mut self, event: SimEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: SimEvent) {}
}

/// Collects events in order.
impl EventSink for Vec<SimEvent> {
    fn emit(&mut self, event: SimEvent) {
        self.push(event);
    }
}
