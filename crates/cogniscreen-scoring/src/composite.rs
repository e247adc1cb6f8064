//! Weighted composite risk aggregation across heterogeneous tests.

use std::collections::BTreeMap;

use cogniscreen_core::models::composite::CompositeResult;
use cogniscreen_core::models::score::RiskLevel;
use tracing::debug;

use crate::narrative;

/// Default weights reflecting the diagnostic importance of each battery
/// component for dementia screening.
pub fn default_weights() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("mmse".to_string(), 0.25),
        ("moca".to_string(), 0.25),
        ("memory_tests".to_string(), 0.30),
        ("attention_tests".to_string(), 0.10),
        ("language_tests".to_string(), 0.10),
    ])
}

/// Blend named test scores (each on a 0-100 scale) into one composite risk
/// judgment.
///
/// Only scores whose names appear in the weight map contribute, and the sum
/// is divided by the matched weights alone — a partial battery therefore
/// shifts the relative proportions of the remaining components rather than
/// shrinking the composite. When nothing matches, the unweighted mean of
/// all provided scores is used instead.
pub fn composite_score(
    scores: &BTreeMap<String, f64>,
    weights: Option<&BTreeMap<String, f64>>,
) -> CompositeResult {
    let default;
    let weights = match weights {
        Some(w) => w,
        None => {
            default = default_weights();
            &default
        }
    };

    let mut weighted_sum = 0.0;
    let mut matched_weight = 0.0;
    for (name, score) in scores {
        if let Some(weight) = weights.get(name) {
            weighted_sum += score * weight;
            matched_weight += weight;
        }
    }

    let composite = if matched_weight > 0.0 {
        weighted_sum / matched_weight
    } else if scores.is_empty() {
        0.0
    } else {
        debug!("no score names matched the weight map, falling back to unweighted mean");
        scores.values().sum::<f64>() / scores.len() as f64
    };

    let risk_category = if composite >= 85.0 {
        RiskLevel::Low
    } else if composite >= 70.0 {
        RiskLevel::Mild
    } else if composite >= 50.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    };

    CompositeResult {
        composite_score: composite,
        risk_category,
        individual_scores: scores.clone(),
        weights_used: weights.clone(),
        clinical_interpretation: narrative::composite_interpretation(composite, risk_category),
    }
}
