//! Normative score evaluation: z-scores, the percentile approximation, and
//! per-instrument clinical interpretation.

use cogniscreen_core::models::bands::EducationBand;
use cogniscreen_core::models::score::{Interpretation, RiskLevel, ScoreResult};
use cogniscreen_norms::NormedInstrument;
use cogniscreen_norms::instruments::digit_span::{
    DigitSpanBackward, DigitSpanForward, SpanDirection,
};
use cogniscreen_norms::instruments::fluency::SemanticFluencyAnimals;
use cogniscreen_norms::instruments::mmse::Mmse;
use cogniscreen_norms::instruments::moca::{self, Moca};
use cogniscreen_norms::table::{CONSERVATIVE_FALLBACK, NormativeRow};
use tracing::debug;

use crate::narrative;

/// Standardized deviation of a raw score from the normative mean. A
/// zero-variance row cannot produce a meaningful deviation; callers get 0.0
/// and must surface the `no_variance` flag on the result.
pub fn z_score(raw: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        0.0
    } else {
        (raw - mean) / std_dev
    }
}

/// Percentile rank from a z-score via the cubic approximation every issued
/// report was computed with. Intentionally not the exact normal CDF —
/// changing the polynomial would shift historical percentiles.
pub fn percentile(z: f64) -> f64 {
    if z < -3.0 {
        return 0.1;
    }
    if z > 3.0 {
        return 99.9;
    }
    let p = 50.0 + 34.13 * z - 2.78 * z.powi(2) + 0.74 * z.powi(3);
    p.clamp(0.1, 99.9)
}

/// Score an MMSE administration against the age × education norms.
///
/// Interpretation is band-relative: normal at or above mean − 0.5σ,
/// borderline down to the cell's cutoff, mild impairment down to cutoff − 5,
/// significant below that.
pub fn score_mmse(raw_score: f64, age: u32, education_label: &str) -> ScoreResult {
    let instrument = Mmse;
    let education = EducationBand::from_label(education_label);
    let band = instrument.resolve_age_band(age);
    let row = resolve_row(&instrument, band.key, education);

    // MMSE cells always carry a cutoff; the fallback row does too.
    let cutoff = row.clinical_cutoff.unwrap_or(20.0);
    let (interpretation, risk_level) = if raw_score >= row.mean - 0.5 * row.std_dev {
        (Interpretation::Normal, RiskLevel::Low)
    } else if raw_score >= cutoff {
        (Interpretation::Borderline, RiskLevel::Mild)
    } else if raw_score >= cutoff - 5.0 {
        (Interpretation::MildImpairment, RiskLevel::Moderate)
    } else {
        (Interpretation::SignificantImpairment, RiskLevel::High)
    };

    build_result(
        &instrument,
        raw_score,
        raw_score,
        row,
        interpretation,
        risk_level,
        narrative::mmse_significance(risk_level).to_string(),
    )
}

/// Score a MoCA administration.
///
/// The low-education bonus point is added before any banding and the
/// adjusted score is capped at 30. Unlike the MMSE, interpretation uses the
/// published absolute thresholds (26/22/17), not band-relative ones — the
/// two scales genuinely differ here and the asymmetry is deliberate.
pub fn score_moca(raw_score: f64, age: u32, education_label: &str) -> ScoreResult {
    let instrument = Moca;
    let education = EducationBand::from_label(education_label);
    let adjusted = (raw_score + moca::education_adjustment(education)).min(30.0);
    let band = instrument.resolve_age_band(age);
    let row = resolve_row(&instrument, band.key, education);

    let (interpretation, risk_level) = if adjusted >= 26.0 {
        (Interpretation::Normal, RiskLevel::Low)
    } else if adjusted >= 22.0 {
        (Interpretation::MildCognitiveImpairment, RiskLevel::Mild)
    } else if adjusted >= 17.0 {
        (Interpretation::ModerateImpairment, RiskLevel::Moderate)
    } else {
        (Interpretation::SevereImpairment, RiskLevel::High)
    };

    build_result(
        &instrument,
        raw_score,
        adjusted,
        row,
        interpretation,
        risk_level,
        narrative::moca_significance(risk_level).to_string(),
    )
}

/// Score a digit span administration against the Wechsler age norms. The
/// tables publish no cutoff, so tiers come from the z-score itself.
pub fn score_digit_span(raw_score: f64, age: u32, direction: SpanDirection) -> ScoreResult {
    let instrument: Box<dyn NormedInstrument> = match direction {
        SpanDirection::Forward => Box::new(DigitSpanForward),
        SpanDirection::Backward => Box::new(DigitSpanBackward),
    };
    let band = instrument.resolve_age_band(age);
    // Span norms are education-independent; the column argument is ignored.
    let row = resolve_row(instrument.as_ref(), band.key, EducationBand::Grade9To12);

    let z = z_score(raw_score, row.mean, row.std_dev);
    let (interpretation, risk_level) = if z >= -1.0 {
        (Interpretation::Normal, RiskLevel::Low)
    } else if z >= -2.0 {
        (Interpretation::Borderline, RiskLevel::Mild)
    } else if z >= -3.0 {
        (Interpretation::MildImpairment, RiskLevel::Moderate)
    } else {
        (Interpretation::SignificantImpairment, RiskLevel::High)
    };

    build_result(
        instrument.as_ref(),
        raw_score,
        raw_score,
        row,
        interpretation,
        risk_level,
        narrative::focal_significance(risk_level, "Attention span"),
    )
}

/// Score an animal-naming fluency administration. Tiering follows the MMSE
/// scheme: band-relative normal threshold, then the published cutoffs.
pub fn score_semantic_fluency(raw_score: f64, age: u32) -> ScoreResult {
    let instrument = SemanticFluencyAnimals;
    let band = instrument.resolve_age_band(age);
    let row = resolve_row(&instrument, band.key, EducationBand::Grade9To12);

    // Fluency cells always publish a cutoff; 2σ below mean is the
    // conventional stand-in should a future table omit one.
    let cutoff = row.clinical_cutoff.unwrap_or(row.mean - 2.0 * row.std_dev);
    let (interpretation, risk_level) = if raw_score >= row.mean - 0.5 * row.std_dev {
        (Interpretation::Normal, RiskLevel::Low)
    } else if raw_score >= cutoff {
        (Interpretation::Borderline, RiskLevel::Mild)
    } else if raw_score >= cutoff - 5.0 {
        (Interpretation::MildImpairment, RiskLevel::Moderate)
    } else {
        (Interpretation::SignificantImpairment, RiskLevel::High)
    };

    build_result(
        &instrument,
        raw_score,
        raw_score,
        row,
        interpretation,
        risk_level,
        narrative::focal_significance(risk_level, "Semantic fluency"),
    )
}

/// Look up the normative cell for the resolved bands, degrading to the
/// conservative fallback row when the published table has no entry. Lookups
/// never fail; imprecision is preferred over refusing to score.
fn resolve_row(
    instrument: &dyn NormedInstrument,
    band_key: &str,
    education: EducationBand,
) -> NormativeRow {
    match instrument.row(band_key, education) {
        Some(row) => *row,
        None => {
            debug!(
                instrument = instrument.id(),
                band = band_key,
                education = education.key(),
                "no normative cell for resolved bands, using conservative fallback row"
            );
            CONSERVATIVE_FALLBACK
        }
    }
}

fn build_result(
    instrument: &dyn NormedInstrument,
    raw_score: f64,
    adjusted_score: f64,
    row: NormativeRow,
    interpretation: Interpretation,
    risk_level: RiskLevel,
    clinical_significance: String,
) -> ScoreResult {
    let z = z_score(adjusted_score, row.mean, row.std_dev);
    let no_variance = row.std_dev == 0.0;
    if no_variance {
        debug!(
            instrument = instrument.id(),
            "normative row has zero variance, z-score fixed at 0.0"
        );
    }
    let max_score = instrument.score_range().max;

    ScoreResult {
        instrument_id: instrument.id().to_string(),
        raw_score,
        adjusted_score,
        education_adjustment: adjusted_score - raw_score,
        max_score,
        percentage: raw_score / max_score * 100.0,
        z_score: z,
        percentile: percentile(z),
        expected_mean: row.mean,
        expected_std: row.std_dev,
        clinical_cutoff: row.clinical_cutoff,
        interpretation,
        risk_level,
        no_variance,
        normative_comparison: narrative::normative_comparison(z),
        clinical_significance,
    }
}
