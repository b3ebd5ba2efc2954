//! Aggregation: count every outcome of a card and collect the predicted winners.

use crate::logic::enumerate::{outcome_count, OutcomeEnumerator};
use crate::logic::resolve::{resolve_by_name, resolve_in_table};
use crate::models::{
    AggregationMode, MatchupBracket, PredictionError, PredictionReport, Roster, StatisticsTable,
};

/// Predict the card: total number of outcomes plus the distinct winners, in the order their
/// matchup was first resolved.
///
/// Winners always come from the statistics, never from the enumerator's branch choice, so each
/// matchup contributes the same winner on every branch and the list holds at most one name per
/// matchup. Both modes produce the same report; `Memoized` skips walking the `2^M` outcomes.
///
/// Any missing or malformed statistic aborts the run; no partial report is returned.
pub fn predict_outcomes(
    roster: &Roster,
    bracket: &MatchupBracket,
    stats: &StatisticsTable,
    mode: AggregationMode,
) -> Result<PredictionReport, PredictionError> {
    let report = match mode {
        AggregationMode::Memoized => predict_memoized(bracket, stats)?,
        AggregationMode::Exhaustive => predict_exhaustive(roster, bracket, stats)?,
    };
    log::debug!(
        "Predicted {} matchup(s): {} outcome(s), {} distinct winner(s) ({:?})",
        bracket.len(),
        report.total_outcomes,
        report.winners.len(),
        mode
    );
    Ok(report)
}

/// Resolve each matchup once, in bracket order. The first enumerated outcome already visits
/// every matchup in that order, so first-seen order is the same as a full walk.
fn predict_memoized(
    bracket: &MatchupBracket,
    stats: &StatisticsTable,
) -> Result<PredictionReport, PredictionError> {
    let mut winners: Vec<String> = Vec::new();
    for matchup in &bracket.matchups {
        let winner = resolve_in_table(matchup, stats)?;
        push_distinct(&mut winners, winner);
    }
    let total_outcomes =
        outcome_count(bracket.len()).ok_or(PredictionError::OutcomeCountOverflow {
            matchups: bracket.len(),
        })?;
    Ok(PredictionReport {
        total_outcomes,
        winners,
    })
}

/// Walk every outcome and re-resolve every matchup in it.
fn predict_exhaustive(
    roster: &Roster,
    bracket: &MatchupBracket,
    stats: &StatisticsTable,
) -> Result<PredictionReport, PredictionError> {
    let mut winners: Vec<String> = Vec::new();
    let mut total_outcomes: u64 = 0;
    for outcome in OutcomeEnumerator::new(roster, bracket) {
        total_outcomes = total_outcomes
            .checked_add(1)
            .ok_or(PredictionError::OutcomeCountOverflow {
                matchups: bracket.len(),
            })?;
        for result in &outcome.results {
            let winner = resolve_by_name(&result.fighter_a, &result.fighter_b, stats)?;
            push_distinct(&mut winners, winner);
        }
    }
    Ok(PredictionReport {
        total_outcomes,
        winners,
    })
}

fn push_distinct(winners: &mut Vec<String>, winner: &str) {
    if !winners.iter().any(|w| w == winner) {
        winners.push(winner.to_string());
    }
}
