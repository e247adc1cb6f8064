use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::composite::CompositeResult;
use crate::models::pattern::ErrorPatternResult;
use crate::models::profile::SubjectProfile;
use crate::models::score::ScoreResult;

/// The merged clinical payload a downstream consumer (API response, report
/// renderer) reads. The scoring engine never assembles one of these itself;
/// callers fill in whichever sections they computed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalReport {
    pub id: Uuid,
    pub subject: SubjectProfile,
    pub mmse: Option<ScoreResult>,
    pub moca: Option<ScoreResult>,
    pub digit_span_forward: Option<ScoreResult>,
    pub digit_span_backward: Option<ScoreResult>,
    pub semantic_fluency: Option<ScoreResult>,
    pub error_patterns: Option<ErrorPatternResult>,
    pub composite: Option<CompositeResult>,
    pub created_at: jiff::Timestamp,
}

impl ClinicalReport {
    pub fn new(subject: SubjectProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject,
            mmse: None,
            moca: None,
            digit_span_forward: None,
            digit_span_backward: None,
            semantic_fluency: None,
            error_patterns: None,
            composite: None,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
