//! Players and their skill ratings.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// The five skill ratings carried by every player, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub bowling: f64,
    pub batting: f64,
    pub fielding: f64,
    pub running: f64,
    pub experience: f64,
}

impl Ratings {
    pub fn new(bowling: f64, batting: f64, fielding: f64, running: f64, experience: f64) -> Self {
        Self {
            bowling,
            batting,
            fielding,
            running,
            experience,
        }
    }

    /// Same value for every attribute. Handy for building test rosters.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value, value)
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("bowling", self.bowling),
            ("batting", self.batting),
            ("fielding", self.fielding),
            ("running", self.running),
            ("experience", self.experience),
        ]
    }
}

/// A cricketer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    name: String,
    ratings: Ratings,
}

impl Player {
    /// Create a player, rejecting any rating outside `[0, 1]` (NaN included).
    pub fn new(name: impl Into<String>, ratings: Ratings) -> Result<Self, SimError> {
        let name = name.into();
        for (attribute, value) in ratings.named() {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::RatingOutOfRange {
                    player: name,
                    attribute,
                    value,
                });
            }
        }
        Ok(Self { name, ratings })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    pub fn bowling(&self) -> f64 {
        self.ratings.bowling
    }

    pub fn batting(&self) -> f64 {
        self.ratings.batting
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
