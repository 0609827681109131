//! Teams: a fixed roster plus the per-match sequencing state.
//!
//! Players are referred to by their index into the roster. The batting order
//! and bowler pool hold indices, so handing out the next batter never needs
//! to clone or move a [`Player`].

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::collections::VecDeque;

use crate::error::SimError;
use crate::player::Player;

#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    roster: Vec<Player>,
    captain: Option<usize>,
    /// Consumed front to back; refilled only by [`Team::reset_batting_order`].
    batting_order: VecDeque<usize>,
    bowler_pool: Vec<usize>,
}

impl Team {
    /// Build a team from its roster. The roster order is the bowler pool order.
    pub fn new(name: impl Into<String>, roster: Vec<Player>) -> Result<Self, SimError> {
        let name = name.into();
        if roster.is_empty() {
            return Err(SimError::EmptyRoster(name));
        }
        let batting_order = (0..roster.len()).collect();
        let bowler_pool = (0..roster.len()).collect();
        Ok(Self {
            name,
            roster,
            captain: None,
            batting_order,
            bowler_pool,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Look up a player by roster index.
    ///
    /// # Panics
    /// If `index` is not a valid roster index.
    pub fn player(&self, index: usize) -> &Player {
        &self.roster[index]
    }

    pub fn captain(&self) -> Option<&Player> {
        self.captain.map(|i| &self.roster[i])
    }

    /// Pick a captain uniformly from the roster.
    ///
    /// The captain is informational; it has no influence on ball outcomes.
    pub fn select_captain(&mut self, rng: &mut dyn RngCore) -> &Player {
        let index = rng.gen_range(0..self.roster.len());
        self.captain = Some(index);
        &self.roster[index]
    }

    /// Put the whole roster back in the batting queue, in roster order.
    pub fn reset_batting_order(&mut self) {
        self.batting_order.clear();
        self.batting_order.extend(0..self.roster.len());
    }

    /// Make every player eligible to bowl again.
    pub fn reset_bowler_pool(&mut self) {
        self.bowler_pool.clear();
        self.bowler_pool.extend(0..self.roster.len());
    }

    /// Send in the next batter, or `None` once the order is exhausted.
    pub fn next_batter(&mut self) -> Option<usize> {
        self.batting_order.pop_front()
    }

    pub fn remaining_batters(&self) -> usize {
        self.batting_order.len()
    }

    /// Choose a bowler uniformly from the pool. The same bowler may be picked
    /// for consecutive overs.
    ///
    /// # Panics
    /// If the bowler pool is empty. A team always has at least one player and
    /// the pool is only ever reset to the full roster, so this is a bug.
    pub fn choose_bowler(&self, rng: &mut dyn RngCore) -> usize {
        *self
            .bowler_pool
            .choose(rng)
            .unwrap_or_else(|| panic!("team {} has an empty bowler pool", self.name))
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
