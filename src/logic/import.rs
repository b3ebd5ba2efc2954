//! Statistics import: read an event's fighters and career stats from a CSV table.

use crate::models::{MatchupBracket, PredictionError, Roster, StatisticsRecord, StatisticsTable};
use serde::Deserialize;
use std::io::Read;

/// One CSV row. Columns other than these are ignored; empty cells become None.
#[derive(Debug, Deserialize)]
struct StatisticsRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "SLpM", default)]
    slpm: Option<f64>,
    #[serde(rename = "Str. Acc.", default)]
    str_acc: Option<String>,
}

/// A card loaded from a statistics table: roster in row order, bracket, and records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventCard {
    pub roster: Roster,
    pub bracket: MatchupBracket,
    pub stats: StatisticsTable,
}

/// Read a CSV with headers `Name`, `SLpM`, `Str. Acc.`.
///
/// Row order is roster order; consecutive rows are paired into matchups. Blank names are
/// skipped. A repeated name keeps its roster slot but its last row wins in the table.
pub fn load_event_csv<R: Read>(reader: R) -> Result<EventCard, PredictionError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut names = Vec::new();
    let mut stats = StatisticsTable::new();
    for row in csv_reader.deserialize::<StatisticsRow>() {
        let row = row?;
        if row.name.is_empty() {
            continue;
        }
        names.push(row.name.clone());
        stats.insert(StatisticsRecord {
            name: row.name,
            slpm: row.slpm,
            str_acc: row.str_acc.filter(|s| !s.is_empty()),
        });
    }

    let roster = Roster { names };
    let bracket = MatchupBracket::from_roster(&roster);
    Ok(EventCard {
        roster,
        bracket,
        stats,
    })
}
