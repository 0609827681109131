//! Knockout tournament runner for cricket-sim
//!
//! This crate provides infrastructure for:
//! - Playing a two-innings match and deciding the winner
//! - Running a single-elimination bracket down to one champion
//! - Building rosters and loading tournament configuration
//! - Saving and reporting tournament results
//!
//! # Usage
//!
//! ```bash
//! # Eight teams, ten overs a side
//! cargo run -p tournament -- run --teams 8 --overs 10
//!
//! # Reproducible run, results written to disk
//! cargo run -p tournament -- run --config tournament.toml --seed 7 --output results.json
//!
//! # Print the report for a saved tournament
//! cargo run -p tournament -- report results.json
//! ```

mod bracket;
mod config;
mod match_runner;
mod results;
mod roster;

pub use bracket::*;
pub use config::*;
pub use match_runner::*;
pub use results::*;
pub use roster::*;
