use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::score::RiskLevel;

/// Weighted blend of multiple test scores into one risk judgment.
/// `weights_used` reports the weight map as resolved for this call — it is
/// not renormalized, and weights for absent test names are simply unused.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeResult {
    pub composite_score: f64,
    pub risk_category: RiskLevel,
    pub individual_scores: BTreeMap<String, f64>,
    pub weights_used: BTreeMap<String, f64>,
    pub clinical_interpretation: String,
}
