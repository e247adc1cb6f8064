use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One MMSE section's outcome as reported by the test administration layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionScore {
    pub score: f64,
    pub max_score: Option<f64>,
}

/// Per-section MMSE scores fed to the error pattern analyzer. Sections the
/// battery never administered stay `None`; the analyzer treats absent data
/// as full credit so it can never flag a deficit that was never tested.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionScores {
    pub registration: Option<SectionScore>,
    pub delayed_recall: Option<SectionScore>,
    pub attention_calculation: Option<SectionScore>,
    pub language_naming: Option<SectionScore>,
    pub language_repetition: Option<SectionScore>,
    pub orientation_time: Option<SectionScore>,
    pub orientation_place: Option<SectionScore>,
}

/// Overall qualitative pattern across the flagged domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OverallPattern {
    NoSignificantPattern,
    MemoryPredominant,
    AttentionExecutive,
    LanguagePredominant,
    Mixed,
}

impl OverallPattern {
    /// Clinician-facing label, worded as in previously issued reports.
    pub fn description(&self) -> &'static str {
        match self {
            OverallPattern::NoSignificantPattern => "No significant error patterns detected",
            OverallPattern::MemoryPredominant => {
                "Memory-predominant pattern (suggestive of Alzheimer's type)"
            }
            OverallPattern::AttentionExecutive => {
                "Attention/Executive pattern (suggestive of vascular or mixed etiology)"
            }
            OverallPattern::LanguagePredominant => {
                "Language-predominant pattern (requires aphasia evaluation)"
            }
            OverallPattern::Mixed => "Mixed cognitive pattern (requires comprehensive assessment)",
        }
    }
}

/// Deficit flags accumulated per cognitive domain, plus the overall pattern.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorPatternResult {
    pub memory_errors: Vec<String>,
    pub attention_errors: Vec<String>,
    pub language_errors: Vec<String>,
    pub visuospatial_errors: Vec<String>,
    pub executive_errors: Vec<String>,
    pub overall_pattern: OverallPattern,
}

impl ErrorPatternResult {
    pub fn total_flags(&self) -> usize {
        self.memory_errors.len()
            + self.attention_errors.len()
            + self.language_errors.len()
            + self.visuospatial_errors.len()
            + self.executive_errors.len()
    }
}
