use std::collections::HashMap;
use std::sync::LazyLock;

use cogniscreen_core::models::bands::EducationBand;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::NormedInstrument;
use crate::table::{AgeBand, NormativeRow, ScoreRange};

/// Which digit span task was administered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SpanDirection {
    Forward,
    Backward,
}

/// Digit span forward, longest span recalled. Wechsler (1997) age norms;
/// education-independent, no published clinical cutoff.
pub struct DigitSpanForward;

/// Digit span backward, longest span recalled in reverse.
pub struct DigitSpanBackward;

const BANDS: [AgeBand; 13] = [
    AgeBand::new("16-17", 16, Some(17)),
    AgeBand::new("18-19", 18, Some(19)),
    AgeBand::new("20-24", 20, Some(24)),
    AgeBand::new("25-29", 25, Some(29)),
    AgeBand::new("30-34", 30, Some(34)),
    AgeBand::new("35-44", 35, Some(44)),
    AgeBand::new("45-54", 45, Some(54)),
    AgeBand::new("55-64", 55, Some(64)),
    AgeBand::new("65-69", 65, Some(69)),
    AgeBand::new("70-74", 70, Some(74)),
    AgeBand::new("75-79", 75, Some(79)),
    AgeBand::new("80-84", 80, Some(84)),
    AgeBand::new("85-89", 85, Some(89)),
];

#[rustfmt::skip]
const FORWARD_CELLS: [(&str, f64, f64); 13] = [
    ("16-17", 6.0, 1.2),
    ("18-19", 6.2, 1.1),
    ("20-24", 6.4, 1.0),
    ("25-29", 6.3, 1.1),
    ("30-34", 6.2, 1.1),
    ("35-44", 6.1, 1.2),
    ("45-54", 6.0, 1.2),
    ("55-64", 5.8, 1.3),
    ("65-69", 5.7, 1.3),
    ("70-74", 5.5, 1.4),
    ("75-79", 5.3, 1.4),
    ("80-84", 5.1, 1.5),
    ("85-89", 4.9, 1.5),
];

#[rustfmt::skip]
const BACKWARD_CELLS: [(&str, f64, f64); 13] = [
    ("16-17", 4.5, 1.2),
    ("18-19", 4.7, 1.1),
    ("20-24", 4.9, 1.0),
    ("25-29", 4.8, 1.1),
    ("30-34", 4.7, 1.1),
    ("35-44", 4.6, 1.2),
    ("45-54", 4.5, 1.2),
    ("55-64", 4.3, 1.3),
    ("65-69", 4.2, 1.3),
    ("70-74", 4.0, 1.4),
    ("75-79", 3.8, 1.4),
    ("80-84", 3.6, 1.5),
    ("85-89", 3.4, 1.5),
];

fn build(cells: &[(&'static str, f64, f64)]) -> HashMap<&'static str, NormativeRow> {
    cells
        .iter()
        .map(|&(band, mean, std_dev)| {
            (
                band,
                NormativeRow {
                    mean,
                    std_dev,
                    clinical_cutoff: None,
                },
            )
        })
        .collect()
}

static FORWARD: LazyLock<HashMap<&'static str, NormativeRow>> =
    LazyLock::new(|| build(&FORWARD_CELLS));
static BACKWARD: LazyLock<HashMap<&'static str, NormativeRow>> =
    LazyLock::new(|| build(&BACKWARD_CELLS));

const SPAN_RANGE: ScoreRange = ScoreRange {
    min: 0.0,
    max: 9.0,
    step: Some(1.0),
};

impl NormedInstrument for DigitSpanForward {
    fn id(&self) -> &str {
        "digit_span_forward"
    }

    fn name(&self) -> &str {
        "Digit Span (forward)"
    }

    fn score_range(&self) -> ScoreRange {
        SPAN_RANGE
    }

    fn age_bands(&self) -> &[AgeBand] {
        &BANDS
    }

    fn row(&self, age_band: &str, _education: EducationBand) -> Option<&NormativeRow> {
        FORWARD.get(age_band)
    }
}

impl NormedInstrument for DigitSpanBackward {
    fn id(&self) -> &str {
        "digit_span_backward"
    }

    fn name(&self) -> &str {
        "Digit Span (backward)"
    }

    fn score_range(&self) -> ScoreRange {
        SPAN_RANGE
    }

    fn age_bands(&self) -> &[AgeBand] {
        &BANDS
    }

    fn row(&self, age_band: &str, _education: EducationBand) -> Option<&NormativeRow> {
        BACKWARD.get(age_band)
    }
}
