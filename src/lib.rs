//! Fight card predictor: library with models and prediction logic.

pub mod logic;
pub mod models;

pub use logic::{
    enumerate_outcomes, load_event_csv, outcome_count, predict_outcomes, resolve_by_name,
    resolve_in_table, resolve_matchup, resolve_side, EventCard, OutcomeEnumerator,
};
pub use models::{
    parse_percentage, AggregationMode, Matchup, MatchupBracket, MatchupResult, Outcome,
    PredictionError, PredictionReport, Roster, Side, StatisticsRecord, StatisticsTable,
    ACCURACY_ATTRIBUTE, OUTPUT_ATTRIBUTE,
};
