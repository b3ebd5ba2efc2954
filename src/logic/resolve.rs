//! Matchup resolution: pick the winner of one fight from career statistics.

use crate::models::{Matchup, PredictionError, Side, StatisticsRecord, StatisticsTable};

/// Which side wins, given both fighters' records.
///
/// Each side scores `SLpM × accuracy`. A wins only with a strictly greater score; ties go to B.
pub fn resolve_side(a: &StatisticsRecord, b: &StatisticsRecord) -> Result<Side, PredictionError> {
    let score_a = a.adjusted_output()?;
    let score_b = b.adjusted_output()?;
    if score_a > score_b {
        Ok(Side::A)
    } else {
        Ok(Side::B)
    }
}

/// Name of the winner between `a` and `b`.
pub fn resolve_matchup<'r>(
    a: &'r StatisticsRecord,
    b: &'r StatisticsRecord,
) -> Result<&'r str, PredictionError> {
    Ok(match resolve_side(a, b)? {
        Side::A => &a.name,
        Side::B => &b.name,
    })
}

/// Look up both fighters by name in `stats` and resolve the fight between them.
pub fn resolve_by_name<'n>(
    fighter_a: &'n str,
    fighter_b: &'n str,
    stats: &StatisticsTable,
) -> Result<&'n str, PredictionError> {
    let a = stats.require(fighter_a)?;
    let b = stats.require(fighter_b)?;
    Ok(match resolve_side(a, b)? {
        Side::A => fighter_a,
        Side::B => fighter_b,
    })
}

/// Resolve `matchup` using the records in `stats`.
pub fn resolve_in_table<'m>(
    matchup: &'m Matchup,
    stats: &StatisticsTable,
) -> Result<&'m str, PredictionError> {
    resolve_by_name(&matchup.fighter_a, &matchup.fighter_b, stats)
}
