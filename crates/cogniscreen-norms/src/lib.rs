//! cogniscreen-norms
//!
//! Normative reference data for the supported cognitive instruments. Pure
//! data — tables are compiled in and built once, nothing here performs I/O.
//! Each instrument declares its age bands, education columns, and per-cell
//! reference statistics from the published literature.

pub mod error;
pub mod instruments;
pub mod table;

use cogniscreen_core::models::bands::EducationBand;
use error::NormsError;
use table::{AgeBand, NormativeRow, ScoreRange, ValidationError};

/// Trait implemented by each normed instrument's reference table.
pub trait NormedInstrument: Send + Sync {
    /// Unique identifier (e.g. "mmse", "digit_span_forward").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "MMSE", "Digit Span (forward)").
    fn name(&self) -> &str;

    /// Valid range for raw scores on this instrument.
    fn score_range(&self) -> ScoreRange;

    /// Age bands in ascending order. Bands are contiguous; the top band may
    /// be open-ended.
    fn age_bands(&self) -> &[AgeBand];

    /// Reference statistics for one (age band, education band) cell, or
    /// `None` where the published table has no entry. Instruments whose
    /// norms are education-independent ignore the education argument.
    fn row(&self, age_band: &str, education: EducationBand) -> Option<&NormativeRow>;

    /// Map an age to this instrument's band. Never fails: ages below the
    /// table floor clamp to the first band, ages above the ceiling to the
    /// last.
    fn resolve_age_band(&self, age: u32) -> &AgeBand {
        let bands = self.age_bands();
        if let Some(band) = bands.iter().find(|b| b.contains(age)) {
            return band;
        }
        let clamped = if bands.first().is_some_and(|b| age < b.min) {
            bands.first()
        } else {
            bands.last()
        };
        clamped.expect("instrument declares at least one age band")
    }

    /// Check a raw score against this instrument's valid range. Advisory:
    /// scoring still accepts any value, this exists for intake validation.
    fn validate(&self, raw_score: f64) -> Option<ValidationError> {
        let range = self.score_range();
        if range.contains(raw_score) {
            return None;
        }
        Some(ValidationError {
            instrument_id: self.id().to_string(),
            value: raw_score,
            expected_range: range,
            message: format!(
                "{}: raw score {} is outside range [{}, {}]",
                self.name(),
                raw_score,
                range.min,
                range.max,
            ),
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn NormedInstrument>> {
    vec![
        Box::new(instruments::mmse::Mmse),
        Box::new(instruments::moca::Moca),
        Box::new(instruments::digit_span::DigitSpanForward),
        Box::new(instruments::digit_span::DigitSpanBackward),
        Box::new(instruments::fluency::SemanticFluencyAnimals),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn NormedInstrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Validate a raw score as received from the test administration layer.
pub fn validate_raw(instrument_id: &str, raw_score: f64) -> Result<(), NormsError> {
    let instrument = get_instrument(instrument_id)
        .ok_or_else(|| NormsError::UnknownInstrument(instrument_id.to_string()))?;
    match instrument.validate(raw_score) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
