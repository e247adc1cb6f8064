use jiff::Unit;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::bands::EducationBand;

/// Age and education metadata for the person being screened. This is the
/// only subject information the scoring engine ever sees.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubjectProfile {
    pub age: u32,
    /// Free-text education descriptor as stored by intake, e.g.
    /// "non_educated", "primary", "secondary", "graduate".
    pub education_label: String,
}

impl SubjectProfile {
    pub fn new(age: u32, education_label: impl Into<String>) -> Self {
        Self {
            age,
            education_label: education_label.into(),
        }
    }

    /// Build a profile from an ISO date of birth, since intake stores DOB
    /// rather than age.
    pub fn from_birth_date(
        birth_date: &str,
        as_of: Date,
        education_label: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let dob: Date = birth_date.parse()?;
        let years = dob.until((Unit::Year, as_of))?.get_years();
        Ok(Self {
            age: years.max(0) as u32,
            education_label: education_label.into(),
        })
    }

    pub fn education_band(&self) -> EducationBand {
        EducationBand::from_label(&self.education_label)
    }
}
