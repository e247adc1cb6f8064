use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Four-level risk ladder shared by every instrument and by the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Mild,
    Moderate,
    High,
}

/// Categorical interpretation of a single instrument score. Each instrument
/// emits its own subset: MMSE and digit span use the first four variants,
/// MoCA uses `Normal` plus the last three. The serialized names match the
/// strings in previously issued reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Interpretation {
    Normal,
    Borderline,
    MildImpairment,
    SignificantImpairment,
    MildCognitiveImpairment,
    ModerateImpairment,
    SevereImpairment,
}

/// The full result of scoring one instrument against its normative table.
/// Produced fresh per call; nothing here is shared or mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub raw_score: f64,
    /// Score after any instrument-specific adjustment (MoCA education
    /// bonus). Equal to `raw_score` for instruments without adjustments.
    pub adjusted_score: f64,
    pub education_adjustment: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub z_score: f64,
    /// Percentile rank, always within [0.1, 99.9].
    pub percentile: f64,
    pub expected_mean: f64,
    pub expected_std: f64,
    pub clinical_cutoff: Option<f64>,
    pub interpretation: Interpretation,
    pub risk_level: RiskLevel,
    /// Set when the normative row had zero variance and the z-score fell
    /// back to 0.0.
    pub no_variance: bool,
    pub normative_comparison: String,
    pub clinical_significance: String,
}
