//! Match venues.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSize {
    Large,
    Medium,
    Small,
}

impl FieldSize {
    pub const ALL: [FieldSize; 3] = [FieldSize::Large, FieldSize::Medium, FieldSize::Small];
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldSize::Large => "Large",
            FieldSize::Medium => "Medium",
            FieldSize::Small => "Small",
        };
        f.write_str(s)
    }
}

/// Ratio values a randomly generated field can take: 0.1, 0.2, ..., 0.9.
const RATIO_STEPS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// Playing conditions for one match. Only `pitch_conditions` feeds the
/// outcome model; the rest is carried for commentary and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldRecord")]
pub struct Field {
    pub size: FieldSize,
    pub fan_ratio: f64,
    pub pitch_conditions: f64,
    pub home_advantage: f64,
}

impl Field {
    pub fn new(
        size: FieldSize,
        fan_ratio: f64,
        pitch_conditions: f64,
        home_advantage: f64,
    ) -> Result<Self, SimError> {
        for (attribute, value) in [
            ("fan_ratio", fan_ratio),
            ("pitch_conditions", pitch_conditions),
            ("home_advantage", home_advantage),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::FieldOutOfRange { attribute, value });
            }
        }
        Ok(Self {
            size,
            fan_ratio,
            pitch_conditions,
            home_advantage,
        })
    }

    /// Draw every attribute independently.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        let size = FieldSize::ALL[rng.gen_range(0..FieldSize::ALL.len())];
        let mut ratio = || RATIO_STEPS[rng.gen_range(0..RATIO_STEPS.len())];
        Self {
            size,
            fan_ratio: ratio(),
            pitch_conditions: ratio(),
            home_advantage: ratio(),
        }
    }
}

/// Unchecked wire form of [`Field`]; loading goes through [`Field::new`].
#[derive(Deserialize)]
struct FieldRecord {
    size: FieldSize,
    fan_ratio: f64,
    pitch_conditions: f64,
    home_advantage: f64,
}

impl TryFrom<FieldRecord> for Field {
    type Error = SimError;

    fn try_from(record: FieldRecord) -> Result<Self, Self::Error> {
        Field::new(
            record.size,
            record.fan_ratio,
            record.pitch_conditions,
            record.home_advantage,
        )
    }
}

impl Default for Field {
    fn default() -> Self {
        Self {
            size: FieldSize::Medium,
            fan_ratio: 0.5,
            pitch_conditions: 0.5,
            home_advantage: 0.5,
        }
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod field_tests;
