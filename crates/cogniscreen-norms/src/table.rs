use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Reference statistics for one (instrument, age band, education band) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormativeRow {
    pub mean: f64,
    pub std_dev: f64,
    /// Raw score at or below which performance is clinically notable.
    /// Absent for instruments whose published tables give no cutoff
    /// (digit span).
    pub clinical_cutoff: Option<f64>,
}

/// Conservative MMSE-family row used when a table has no cell for the
/// resolved bands. These exact values must stay fixed for continuity with
/// previously issued reports.
pub const CONSERVATIVE_FALLBACK: NormativeRow = NormativeRow {
    mean: 24.0,
    std_dev: 3.0,
    clinical_cutoff: Some(20.0),
};

/// An age interval with a stable string key. `max` is inclusive; `None`
/// marks the open-ended top band ("80+").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBand {
    pub key: &'static str,
    pub min: u32,
    pub max: Option<u32>,
}

impl AgeBand {
    pub const fn new(key: &'static str, min: u32, max: Option<u32>) -> Self {
        Self { key, min, max }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && self.max.is_none_or(|max| age <= max)
    }
}

/// Defines the valid range for a raw score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A raw score outside its instrument's valid range.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub instrument_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}
