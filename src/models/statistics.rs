//! StatisticsRecord and StatisticsTable: per-fighter numbers used to score a matchup.

use crate::models::prediction::PredictionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the strikes-landed-per-minute attribute (as it appears in error messages and CSV).
pub const OUTPUT_ATTRIBUTE: &str = "SLpM";
/// Name of the striking accuracy attribute.
pub const ACCURACY_ATTRIBUTE: &str = "Str. Acc.";

/// Career statistics for one fighter.
///
/// Attributes are kept as they arrive from the statistics source; `accuracy` is the raw
/// percentage string (e.g. `"45.0%"`) and is only parsed when a matchup is resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    pub name: String,
    /// Significant strikes landed per minute. None if the source had no value.
    pub slpm: Option<f64>,
    /// Striking accuracy, percent-formatted. None if the source had no value.
    pub str_acc: Option<String>,
}

impl StatisticsRecord {
    pub fn new(name: impl Into<String>, slpm: f64, str_acc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slpm: Some(slpm),
            str_acc: Some(str_acc.into()),
        }
    }

    /// Strikes landed per minute. `MissingStatistic` if absent, `MalformedStatistic` if NaN or
    /// infinite.
    pub fn output_per_minute(&self) -> Result<f64, PredictionError> {
        let slpm = self.slpm.ok_or_else(|| PredictionError::MissingStatistic {
            name: self.name.clone(),
            attribute: Some(OUTPUT_ATTRIBUTE),
        })?;
        if !slpm.is_finite() {
            return Err(PredictionError::MalformedStatistic {
                name: self.name.clone(),
                attribute: OUTPUT_ATTRIBUTE,
                value: slpm.to_string(),
            });
        }
        Ok(slpm)
    }

    /// Accuracy as a ratio (`"45.0%"` -> 0.45).
    pub fn accuracy_ratio(&self) -> Result<f64, PredictionError> {
        let raw = self
            .str_acc
            .as_deref()
            .ok_or_else(|| PredictionError::MissingStatistic {
                name: self.name.clone(),
                attribute: Some(ACCURACY_ATTRIBUTE),
            })?;
        parse_percentage(raw).ok_or_else(|| PredictionError::MalformedPercentage {
            name: self.name.clone(),
            value: raw.to_string(),
        })
    }

    /// Strikes landed per minute scaled by accuracy: the score used to resolve a matchup.
    pub fn adjusted_output(&self) -> Result<f64, PredictionError> {
        Ok(self.output_per_minute()? * self.accuracy_ratio()?)
    }
}

/// Parse `"NN.N%"` into a ratio. The trailing percent sign is required.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    let number = raw.trim().strip_suffix('%')?;
    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value / 100.0)
}

/// Name -> record lookup for one prediction run. Inserting a duplicate name replaces the
/// earlier record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatisticsTable {
    records: HashMap<String, StatisticsRecord>,
}

impl StatisticsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: StatisticsRecord) {
        self.records.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&StatisticsRecord> {
        self.records.get(name)
    }

    /// Record for `name`, or `MissingStatistic` when the fighter has no record at all.
    pub fn require(&self, name: &str) -> Result<&StatisticsRecord, PredictionError> {
        self.get(name).ok_or_else(|| PredictionError::MissingStatistic {
            name: name.to_string(),
            attribute: None,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<StatisticsRecord> for StatisticsTable {
    fn from_iter<I: IntoIterator<Item = StatisticsRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}
