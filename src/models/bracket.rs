//! Roster, Matchup, and MatchupBracket: who fights whom on the card.

use serde::{Deserialize, Serialize};

/// Ordered list of fighter names for one event.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub names: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Which side of a matchup.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// A single pairing of two fighters.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub fighter_a: String,
    pub fighter_b: String,
}

impl Matchup {
    pub fn new(fighter_a: impl Into<String>, fighter_b: impl Into<String>) -> Self {
        Self {
            fighter_a: fighter_a.into(),
            fighter_b: fighter_b.into(),
        }
    }

    /// Name of the fighter opposite `side`.
    pub fn opponent(&self, side: Side) -> &str {
        match side {
            Side::A => &self.fighter_b,
            Side::B => &self.fighter_a,
        }
    }
}

/// Ordered matchups for an event.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchupBracket {
    pub matchups: Vec<Matchup>,
}

impl MatchupBracket {
    pub fn new(matchups: Vec<Matchup>) -> Self {
        Self { matchups }
    }

    /// Pair roster entries two at a time (0 vs 1, 2 vs 3, ...).
    /// A trailing unpaired name is dropped.
    pub fn from_roster(roster: &Roster) -> Self {
        let matchups = roster
            .names
            .chunks_exact(2)
            .map(|pair| Matchup::new(pair[0].as_str(), pair[1].as_str()))
            .collect();
        Self { matchups }
    }

    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }
}
