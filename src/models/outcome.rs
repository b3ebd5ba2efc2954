//! Outcome: one assignment of a winner to every matchup in a bracket.

use crate::models::bracket::{Matchup, Side};
use serde::{Deserialize, Serialize};

/// One matchup with the side picked to win on this branch.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchupResult {
    pub fighter_a: String,
    pub fighter_b: String,
    pub winner: Side,
}

impl MatchupResult {
    pub fn new(matchup: &Matchup, winner: Side) -> Self {
        Self {
            fighter_a: matchup.fighter_a.clone(),
            fighter_b: matchup.fighter_b.clone(),
            winner,
        }
    }

    pub fn winner_name(&self) -> &str {
        match self.winner {
            Side::A => &self.fighter_a,
            Side::B => &self.fighter_b,
        }
    }

    pub fn loser_name(&self) -> &str {
        match self.winner {
            Side::A => &self.fighter_b,
            Side::B => &self.fighter_a,
        }
    }
}

/// A complete branch of the enumeration: one result per matchup, in bracket order.
///
/// The winners here are the enumerator's free choices, not a prediction; see
/// `logic::resolve_matchup` for the statistics-based winner.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub results: Vec<MatchupResult>,
    /// Roster names that did not lose a matchup on this branch (roster order).
    pub remaining: Vec<String>,
}

impl Outcome {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
