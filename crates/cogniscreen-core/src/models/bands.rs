use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Education bucket used to select the correct normative row. Cognitive test
/// performance is strongly confounded by schooling, so every norm lookup is
/// keyed by one of these four buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EducationBand {
    /// 0–4 years of schooling.
    Grade0To4,
    /// 5–8 years.
    Grade5To8,
    /// 9–12 years.
    Grade9To12,
    /// Any tertiary education.
    College,
}

impl EducationBand {
    /// Map a free-text education descriptor from the intake flow onto the
    /// four normative buckets. Unrecognized labels default to `Grade9To12`
    /// rather than erroring — secondary education is the reference
    /// population of the published tables.
    pub fn from_label(label: &str) -> Self {
        match label {
            "non_educated" => EducationBand::Grade0To4,
            "primary" => EducationBand::Grade5To8,
            "secondary" => EducationBand::Grade9To12,
            "graduate" | "postgraduate" => EducationBand::College,
            _ => EducationBand::Grade9To12,
        }
    }

    /// Stable key used in the published normative tables.
    pub fn key(&self) -> &'static str {
        match self {
            EducationBand::Grade0To4 => "grade_0-4",
            EducationBand::Grade5To8 => "grade_5-8",
            EducationBand::Grade9To12 => "grade_9-12",
            EducationBand::College => "college",
        }
    }
}
