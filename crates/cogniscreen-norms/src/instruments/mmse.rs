use std::collections::HashMap;
use std::sync::LazyLock;

use cogniscreen_core::models::bands::EducationBand::{
    self, College, Grade0To4, Grade5To8, Grade9To12,
};

use crate::NormedInstrument;
use crate::table::{AgeBand, NormativeRow, ScoreRange};

/// MMSE: Mini-Mental State Examination, 30-point global cognitive screen.
/// Normative cells follow the Crum et al. (1993) age × education table.
pub struct Mmse;

const BANDS: [AgeBand; 8] = [
    AgeBand::new("18-24", 18, Some(24)),
    AgeBand::new("25-29", 25, Some(29)),
    AgeBand::new("30-39", 30, Some(39)),
    AgeBand::new("40-49", 40, Some(49)),
    AgeBand::new("50-59", 50, Some(59)),
    AgeBand::new("60-69", 60, Some(69)),
    AgeBand::new("70-79", 70, Some(79)),
    AgeBand::new("80+", 80, None),
];

#[rustfmt::skip]
const CELLS: [(&str, EducationBand, f64, f64, f64); 32] = [
    ("18-24", Grade0To4,  22.8, 3.9, 17.0),
    ("18-24", Grade5To8,  25.3, 3.3, 20.0),
    ("18-24", Grade9To12, 27.2, 2.7, 23.0),
    ("18-24", College,    28.5, 1.8, 26.0),
    ("25-29", Grade0To4,  22.1, 4.1, 16.0),
    ("25-29", Grade5To8,  24.9, 3.4, 19.0),
    ("25-29", Grade9To12, 27.0, 2.8, 22.0),
    ("25-29", College,    28.3, 1.9, 25.0),
    ("30-39", Grade0To4,  21.9, 4.2, 15.0),
    ("30-39", Grade5To8,  24.7, 3.5, 19.0),
    ("30-39", Grade9To12, 26.8, 2.9, 22.0),
    ("30-39", College,    28.1, 2.0, 25.0),
    ("40-49", Grade0To4,  21.7, 4.3, 15.0),
    ("40-49", Grade5To8,  24.5, 3.6, 18.0),
    ("40-49", Grade9To12, 26.6, 3.0, 21.0),
    ("40-49", College,    27.9, 2.1, 24.0),
    ("50-59", Grade0To4,  21.5, 4.4, 14.0),
    ("50-59", Grade5To8,  24.3, 3.7, 18.0),
    ("50-59", Grade9To12, 26.4, 3.1, 21.0),
    ("50-59", College,    27.7, 2.2, 24.0),
    ("60-69", Grade0To4,  21.3, 4.5, 14.0),
    ("60-69", Grade5To8,  24.1, 3.8, 17.0),
    ("60-69", Grade9To12, 26.2, 3.2, 20.0),
    ("60-69", College,    27.5, 2.3, 23.0),
    ("70-79", Grade0To4,  21.1, 4.6, 13.0),
    ("70-79", Grade5To8,  23.9, 3.9, 17.0),
    ("70-79", Grade9To12, 26.0, 3.3, 20.0),
    ("70-79", College,    27.3, 2.4, 23.0),
    ("80+",   Grade0To4,  20.9, 4.7, 12.0),
    ("80+",   Grade5To8,  23.7, 4.0, 16.0),
    ("80+",   Grade9To12, 25.8, 3.4, 19.0),
    ("80+",   College,    27.1, 2.5, 22.0),
];

static TABLE: LazyLock<HashMap<(&'static str, EducationBand), NormativeRow>> =
    LazyLock::new(|| {
        CELLS
            .iter()
            .map(|&(band, education, mean, std_dev, cutoff)| {
                (
                    (band, education),
                    NormativeRow {
                        mean,
                        std_dev,
                        clinical_cutoff: Some(cutoff),
                    },
                )
            })
            .collect()
    });

impl NormedInstrument for Mmse {
    fn id(&self) -> &str {
        "mmse"
    }

    fn name(&self) -> &str {
        "MMSE"
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
        TABLE.get(&(key, education))
    }
}
