//! Prediction logic: enumeration, resolution, aggregation, import.

mod aggregate;
mod enumerate;
mod import;
mod resolve;

pub use aggregate::predict_outcomes;
pub use enumerate::{enumerate_outcomes, outcome_count, OutcomeEnumerator};
pub use import::{load_event_csv, EventCard};
pub use resolve::{resolve_by_name, resolve_in_table, resolve_matchup, resolve_side};
