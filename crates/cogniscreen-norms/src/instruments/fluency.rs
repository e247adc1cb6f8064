use std::collections::HashMap;
use std::sync::LazyLock;

use cogniscreen_core::models::bands::EducationBand;

use crate::NormedInstrument;
use crate::table::{AgeBand, NormativeRow, ScoreRange};

/// Semantic fluency, animal naming in 60 seconds. Benton & Hamsher (1989)
/// age norms; education-independent.
pub struct SemanticFluencyAnimals;

const BANDS: [AgeBand; 6] = [
    AgeBand::new("20-39", 20, Some(39)),
    AgeBand::new("40-49", 40, Some(49)),
    AgeBand::new("50-59", 50, Some(59)),
    AgeBand::new("60-69", 60, Some(69)),
    AgeBand::new("70-79", 70, Some(79)),
    AgeBand::new("80+", 80, None),
];

#[rustfmt::skip]
const CELLS: [(&str, f64, f64, f64); 6] = [
    ("20-39", 22.0, 6.0, 12.0),
    ("40-49", 20.0, 6.0, 11.0),
    ("50-59", 19.0, 5.5, 10.0),
    ("60-69", 17.0, 5.0,  9.0),
    ("70-79", 15.0, 4.5,  8.0),
    ("80+",   13.0, 4.0,  7.0),
];

static TABLE: LazyLock<HashMap<&'static str, NormativeRow>> = LazyLock::new(|| {
    CELLS
        .iter()
        .map(|&(band, mean, std_dev, cutoff)| {
            (
                band,
                NormativeRow {
                    mean,
                    std_dev,
                    clinical_cutoff: Some(cutoff),
                },
            )
        })
        .collect()
});

impl NormedInstrument for SemanticFluencyAnimals {
    fn id(&self) -> &str {
        "semantic_fluency_animals"
    }

    fn name(&self) -> &str {
        "Semantic Fluency (animals)"
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: 50.0,
            step: Some(1.0),
        }
    }

    fn age_bands(&self) -> &[AgeBand] {
        &BANDS
    }

    fn row(&self, age_band: &str, _education: EducationBand) -> Option<&NormativeRow> {
        TABLE.get(age_band)
    }
}
