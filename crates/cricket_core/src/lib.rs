//! Cricket simulation core
//!
//! Everything needed to play one innings ball by ball:
//! - Players, teams and fields
//! - The per-ball outcome model ([`OutcomePredictor`])
//! - The umpire's scoreboard
//! - The innings loop and the structured event feed it emits
//!
//! Matches and brackets are built on top of this in the `tournament` crate.

pub mod error;
pub mod events;
pub mod field;
pub mod innings;
pub mod player;
pub mod predictor;
pub mod scoreboard;
pub mod team;

pub use error::*;
pub use events::*;
pub use field::*;
pub use innings::*;
pub use player::*;
pub use predictor::{RatingPredictor, ScriptedPredictor};
pub use scoreboard::Scoreboard;
pub use team::Team;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

// =============================================================================
// Outcome model — decides every delivery of every innings
// =============================================================================

/// Highest run value a single delivery can produce.
pub const MAX_RUNS_PER_BALL: u8 = 6;

/// The umpire's call on a single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Out,
    NotOut,
}

/// Trait implemented by every ball outcome model.
///
/// The innings loop asks for a [`Verdict`] on every delivery and, when the
/// batter survives, for the runs scored. Randomness is always drawn from the
/// generator passed in, never from a thread-local one.
pub trait OutcomePredictor {
    /// Decide whether `batter` is dismissed by `bowler` on this delivery.
    fn predict(
        &mut self,
        batter: &Player,
        bowler: &Player,
        field: &Field,
        rng: &mut dyn RngCore,
    ) -> Verdict;

    /// Runs scored off a delivery the batter survived.
    ///
    /// Must return a value in `0..=MAX_RUNS_PER_BALL`. The default draws
    /// uniformly from that range.
    fn runs(
        &mut self,
        _batter: &Player,
        _bowler: &Player,
        _field: &Field,
        rng: &mut dyn RngCore,
    ) -> u8 {
        rng.gen_range(0..=MAX_RUNS_PER_BALL)
    }

    /// Short identifier used in logs.
    fn name(&self) -> &str;
}
