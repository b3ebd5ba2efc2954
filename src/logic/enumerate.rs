//! Outcome enumeration: every way to assign a winner to each matchup on a card.

use crate::models::{MatchupBracket, MatchupResult, Outcome, Roster, Side};

/// Number of outcomes for a bracket of `matchups` pairings (`2^M`), or None if it overflows u64.
pub fn outcome_count(matchups: usize) -> Option<u64> {
    u32::try_from(matchups)
        .ok()
        .and_then(|m| 1u64.checked_shl(m))
}

/// Lazy depth-first walk over all `2^M` outcomes of a bracket.
///
/// At each matchup the A-wins branch is visited before the B-wins branch, so the sequence is
/// fully determined by bracket order. The loser of each matchup is dropped from the candidate
/// pool for the rest of the branch; the pool never prunes a branch.
///
/// Only the current branch is held in memory. Build a new enumerator (or clone a fresh one)
/// to replay the same sequence.
#[derive(Clone, Debug)]
pub struct OutcomeEnumerator<'a> {
    bracket: &'a MatchupBracket,
    /// Side picked at each decided matchup of the current branch.
    path: Vec<Side>,
    /// `pools[d]` is the candidate pool before matchup `d` is decided.
    pools: Vec<Vec<&'a str>>,
    /// Depth fixed by the caller's prefix; backtracking never goes above it.
    base: usize,
    started: bool,
    done: bool,
}

impl<'a> OutcomeEnumerator<'a> {
    /// Enumerate every outcome of `bracket`, starting from the full roster as candidate pool.
    pub fn new(roster: &'a Roster, bracket: &'a MatchupBracket) -> Self {
        Self::with_prefix(roster, bracket, &[])
    }

    /// Enumerate only the outcomes whose first matchups are decided as in `prefix`.
    /// Prefix entries past the end of the bracket are ignored.
    pub fn with_prefix(roster: &'a Roster, bracket: &'a MatchupBracket, prefix: &[Side]) -> Self {
        let pool = roster.names.iter().map(String::as_str).collect();
        let mut enumerator = Self {
            bracket,
            path: Vec::with_capacity(bracket.len()),
            pools: vec![pool],
            base: 0,
            started: false,
            done: false,
        };
        for &side in prefix.iter().take(bracket.len()) {
            enumerator.push(side);
        }
        enumerator.base = enumerator.path.len();
        enumerator
    }

    /// Total number of outcomes this enumerator yields from the start.
    pub fn expected_len(&self) -> Option<u64> {
        outcome_count(self.bracket.len() - self.base)
    }

    fn push(&mut self, side: Side) {
        let bracket = self.bracket;
        let depth = self.path.len();
        let loser = bracket.matchups[depth].opponent(side);
        let pool = self.pools[depth]
            .iter()
            .copied()
            .filter(|name| *name != loser)
            .collect();
        self.path.push(side);
        self.pools.push(pool);
    }

    /// Extend the current branch with A-wins until every matchup is decided.
    fn descend(&mut self) {
        while self.path.len() < self.bracket.len() {
            self.push(Side::A);
        }
    }

    /// Move to the next leaf. Returns false once both branches of every level are visited.
    fn advance(&mut self) -> bool {
        while self.path.len() > self.base {
            let side = self.path.pop();
            self.pools.pop();
            if side == Some(Side::A) {
                self.push(Side::B);
                self.descend();
                return true;
            }
        }
        false
    }

    fn current(&self) -> Outcome {
        let results = self
            .bracket
            .matchups
            .iter()
            .zip(&self.path)
            .map(|(m, &side)| MatchupResult::new(m, side))
            .collect();
        let remaining = self
            .pools
            .last()
            .map(|pool| pool.iter().map(|name| name.to_string()).collect())
            .unwrap_or_default();
        Outcome { results, remaining }
    }
}

impl Iterator for OutcomeEnumerator<'_> {
    type Item = Outcome;

    fn next(&mut self) -> Option<Outcome> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            self.descend();
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.current())
    }
}

/// Convenience constructor: all outcomes of `bracket` for `roster`.
pub fn enumerate_outcomes<'a>(
    roster: &'a Roster,
    bracket: &'a MatchupBracket,
) -> OutcomeEnumerator<'a> {
    OutcomeEnumerator::new(roster, bracket)
}
