//! The umpire's running score for the innings in progress.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub runs: u32,
    pub wickets: u32,
    /// Completed overs.
    pub overs: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_runs(&mut self, runs: u8) {
        self.runs += u32::from(runs);
    }

    pub fn record_wicket(&mut self) {
        self.wickets += 1;
    }

    pub fn complete_over(&mut self) {
        self.overs += 1;
    }

    /// Zero everything before the second innings.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
