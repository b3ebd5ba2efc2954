//! Data structures for a fight card: fighters' statistics, matchups, outcomes, reports.

mod bracket;
mod outcome;
mod prediction;
mod statistics;

pub use bracket::{Matchup, MatchupBracket, Roster, Side};
pub use outcome::{MatchupResult, Outcome};
pub use prediction::{AggregationMode, PredictionError, PredictionReport};
pub use statistics::{
    parse_percentage, StatisticsRecord, StatisticsTable, ACCURACY_ATTRIBUTE, OUTPUT_ATTRIBUTE,
};
