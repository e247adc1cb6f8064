use std::collections::HashMap;
use std::sync::LazyLock;

use cogniscreen_core::models::bands::EducationBand;

use crate::NormedInstrument;
use crate::table::{AgeBand, NormativeRow, ScoreRange};

/// MoCA: Montreal Cognitive Assessment, 30-point screen, more sensitive to
/// mild impairment than the MMSE. Norms follow Nasreddine et al. (2005),
/// which publishes only two education columns (≤12 years, college).
pub struct Moca;

/// Bonus point added to the raw score when schooling is 8 years or less,
/// applied before any band lookup and capped at the 30-point maximum.
pub const EDUCATION_ADJUSTMENT: f64 = 1.0;

/// The adjustment the given education band earns.
pub fn education_adjustment(education: EducationBand) -> f64 {
    match education {
        EducationBand::Grade0To4 | EducationBand::Grade5To8 => EDUCATION_ADJUSTMENT,
        EducationBand::Grade9To12 | EducationBand::College => 0.0,
    }
}

const BANDS: [AgeBand; 3] = [
    AgeBand::new("18-65", 18, Some(65)),
    AgeBand::new("66-75", 66, Some(75)),
    AgeBand::new("76+", 76, None),
];

// Column keys as published: everything below tertiary collapses into one.
const GRADE_0_12: &str = "grade_0-12";
const COLLEGE: &str = "college";

#[rustfmt::skip]
const CELLS: [(&str, &str, f64, f64, f64); 6] = [
    ("18-65", GRADE_0_12, 25.9, 3.1, 22.0),
    ("18-65", COLLEGE,    27.4, 2.1, 26.0),
    ("66-75", GRADE_0_12, 25.1, 3.3, 21.0),
    ("66-75", COLLEGE,    26.8, 2.3, 25.0),
    ("76+",   GRADE_0_12, 24.3, 3.5, 20.0),
    ("76+",   COLLEGE,    26.2, 2.5, 24.0),
];

static TABLE: LazyLock<HashMap<(&'static str, &'static str), NormativeRow>> =
    LazyLock::new(|| {
        CELLS
            .iter()
            .map(|&(band, column, mean, std_dev, cutoff)| {
                (
                    (band, column),
                    NormativeRow {
                        mean,
                        std_dev,
                        clinical_cutoff: Some(cutoff),
                    },
                )
            })
            .collect()
    });

fn column_for(education: EducationBand) -> &'static str {
    match education {
        EducationBand::College => COLLEGE,
        _ => GRADE_0_12,
    }
}

impl NormedInstrument for Moca {
    fn id(&self) -> &str {
        "moca"
    }

    fn name(&self) -> &str {
        "MoCA"
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: 30.0,
            step: Some(1.0),
        }
    }

    fn age_bands(&self) -> &[AgeBand] {
        &BANDS
    }

    fn row(&self, age_band: &str, education: EducationBand) -> Option<&NormativeRow> {
        let key = BANDS.iter().find(|b| b.key == age_band)?.key;
        TABLE.get(&(key, column_for(education)))
    }
}
