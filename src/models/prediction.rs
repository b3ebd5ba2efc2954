//! PredictionReport, AggregationMode, and PredictionError.

use serde::{Deserialize, Serialize};

/// Errors that can occur while predicting a card.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PredictionError {
    /// A fighter in the bracket has no statistics record, or the record lacks an attribute
    /// (`attribute` is None when the whole record is missing).
    MissingStatistic {
        name: String,
        attribute: Option<&'static str>,
    },
    /// A numeric attribute is NaN or infinite.
    MalformedStatistic {
        name: String,
        attribute: &'static str,
        value: String,
    },
    /// Striking accuracy is not a `"NN.N%"` string.
    MalformedPercentage { name: String, value: String },
    /// `2^matchups` does not fit in a u64.
    OutcomeCountOverflow { matchups: usize },
    /// The statistics table could not be read.
    InvalidStatisticsTable(String),
}

impl std::fmt::Display for PredictionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionError::MissingStatistic {
                name,
                attribute: Some(attribute),
            } => write!(f, "Missing {} for {}", attribute, name),
            PredictionError::MissingStatistic {
                name,
                attribute: None,
            } => write!(f, "No statistics for {}", name),
            PredictionError::MalformedStatistic {
                name,
                attribute,
                value,
            } => write!(f, "Malformed {} '{}' for {}", attribute, value, name),
            PredictionError::MalformedPercentage { name, value } => {
                write!(f, "Malformed accuracy '{}' for {}", value, name)
            }
            PredictionError::OutcomeCountOverflow { matchups } => {
                write!(f, "Too many matchups to count outcomes ({})", matchups)
            }
            PredictionError::InvalidStatisticsTable(msg) => {
                write!(f, "Invalid statistics table: {}", msg)
            }
        }
    }
}

impl std::error::Error for PredictionError {}

impl From<csv::Error> for PredictionError {
    fn from(e: csv::Error) -> Self {
        PredictionError::InvalidStatisticsTable(e.to_string())
    }
}

/// How the aggregator walks the outcome space.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// Resolve each matchup once and compute the outcome count as `2^M`.
    #[default]
    Memoized,
    /// Walk every enumerated outcome and re-resolve every matchup in it.
    Exhaustive,
}

impl std::str::FromStr for AggregationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memoized" => Ok(AggregationMode::Memoized),
            "exhaustive" => Ok(AggregationMode::Exhaustive),
            other => Err(format!("unknown aggregation mode '{}'", other)),
        }
    }
}

/// Result of a prediction run: how many outcomes exist and who wins.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Number of enumerated outcomes (`2^M` for M matchups).
    pub total_outcomes: u64,
    /// Distinct resolved winners, first-seen order.
    pub winners: Vec<String>,
}

impl std::fmt::Display for PredictionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total number of outcomes: {}", self.total_outcomes)?;
        for (i, winner) in self.winners.iter().enumerate() {
            writeln!(f, "Fight {} Winner: {}", i + 1, winner)?;
        }
        Ok(())
    }
}
