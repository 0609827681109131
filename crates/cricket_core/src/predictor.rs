//! Outcome models.
//!
//! [`RatingPredictor`] is the model used for real tournaments.
//! [`ScriptedPredictor`] replays fixed outcomes and is what tests and
//! what-if runs use to pin an innings down exactly.

use rand::{Rng, RngCore};

use crate::{Field, OutcomePredictor, Player, Verdict, MAX_RUNS_PER_BALL};

/// Compare the two weighted scores. Only a strictly greater batting score is
/// a dismissal; equal scores are not out.
pub fn resolve(batting_score: f64, bowling_score: f64) -> Verdict {
    if batting_score > bowling_score {
        Verdict::Out
    } else {
        Verdict::NotOut
    }
}

/// Rating-driven model.
///
/// Each delivery draws `u1, u2` uniformly from `[0, 1)` and compares
/// `batting * pitch * u1` against `bowling * pitch * u2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingPredictor;

impl RatingPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl OutcomePredictor for RatingPredictor {
    fn predict(
        &mut self,
        batter: &Player,
        bowler: &Player,
        field: &Field,
        rng: &mut dyn RngCore,
    ) -> Verdict {
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();
        let batting_score = batter.batting() * field.pitch_conditions * u1;
        let bowling_score = bowler.bowling() * field.pitch_conditions * u2;
        resolve(batting_score, bowling_score)
    }

    fn name(&self) -> &str {
        "ratings"
    }
}

/// Replays a fixed sequence of verdicts, cycling when it runs out, and
/// scores a constant number of runs off every surviving delivery.
///
/// Consumes no randomness.
#[derive(Debug, Clone)]
pub struct ScriptedPredictor {
    script: Vec<Verdict>,
    cursor: usize,
    runs: u8,
}

impl ScriptedPredictor {
    /// Cycle through `script`. An empty script behaves as "never out".
    /// `runs` is capped at [`MAX_RUNS_PER_BALL`].
    pub fn new(script: Vec<Verdict>, runs: u8) -> Self {
        Self {
            script,
            cursor: 0,
            runs: runs.min(MAX_RUNS_PER_BALL),
        }
    }

    pub fn always_not_out(runs: u8) -> Self {
        Self::new(vec![Verdict::NotOut], runs)
    }

    pub fn always_out() -> Self {
        Self::new(vec![Verdict::Out], 0)
    }

    /// Number of verdicts handed out so far.
    pub fn deliveries(&self) -> usize {
        self.cursor
    }
}

impl OutcomePredictor for ScriptedPredictor {
    fn predict(
        &mut self,
        _batter: &Player,
        _bowler: &Player,
        _field: &Field,
        _rng: &mut dyn RngCore,
    ) -> Verdict {
        let verdict = if self.script.is_empty() {
            Verdict::NotOut
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        verdict
    }

    fn runs(
        &mut self,
        _batter: &Player,
        _bowler: &Player,
        _field: &Field,
        _rng: &mut dyn RngCore,
    ) -> u8 {
        self.runs
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
#[path = "predictor_tests.rs"]
mod predictor_tests;
