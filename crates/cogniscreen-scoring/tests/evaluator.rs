use cogniscreen_core::models::score::{Interpretation, RiskLevel};
use cogniscreen_norms::instruments::digit_span::SpanDirection;
use cogniscreen_scoring::{
    percentile, score_digit_span, score_mmse, score_moca, score_semantic_fluency, z_score,
};

const TOL: f64 = 1e-9;

#[test]
fn percentile_is_exactly_50_at_z_zero() {
    assert_eq!(percentile(0.0), 50.0);
}

#[test]
fn percentile_matches_the_cubic_approximation() {
    // 50 + 34.13 - 2.78 + 0.74
    assert!((percentile(1.0) - 82.09).abs() < TOL);
    assert!((percentile(-1.0) - (50.0 - 34.13 - 2.78 - 0.74)).abs() < TOL);
}

#[test]
fn percentile_clamps_at_the_tails() {
    assert_eq!(percentile(-3.5), 0.1);
    assert_eq!(percentile(3.5), 99.9);
    // Just inside the shortcut region the polynomial still lands outside
    // [0.1, 99.9] and the clamp applies.
    assert_eq!(percentile(-3.0), 0.1);
    assert_eq!(percentile(3.0), 99.9);
}

#[test]
fn zero_variance_yields_z_zero_instead_of_dividing() {
    assert_eq!(z_score(25.0, 24.0, 0.0), 0.0);
}

#[test]
fn mmse_end_to_end_matches_the_worked_example() {
    // age 68 → band 60-69, secondary → grade_9-12 → {26.2, 3.2, 20}
    let result = score_mmse(22.0, 68, "secondary");
    assert_eq!(result.instrument_id, "mmse");
    assert_eq!(result.expected_mean, 26.2);
    assert_eq!(result.expected_std, 3.2);
    assert_eq!(result.clinical_cutoff, Some(20.0));
    assert!((result.z_score - (-1.3125)).abs() < TOL);
    // The cubic goes negative here; the clamp floors it.
    assert_eq!(result.percentile, 0.1);
    assert_eq!(result.interpretation, Interpretation::Borderline);
    assert_eq!(result.risk_level, RiskLevel::Mild);
    assert_eq!(result.max_score, 30.0);
    assert!((result.percentage - 22.0 / 30.0 * 100.0).abs() < TOL);
    assert!(!result.no_variance);
}

#[test]
fn mmse_tier_boundaries_are_band_relative() {
    // 60-69 × grade_9-12: mean 26.2, std 3.2 → normal threshold 24.6.
    let normal = score_mmse(24.6, 68, "secondary");
    assert_eq!(normal.interpretation, Interpretation::Normal);
    assert_eq!(normal.risk_level, RiskLevel::Low);

    let borderline = score_mmse(24.0, 68, "secondary");
    assert_eq!(borderline.interpretation, Interpretation::Borderline);

    // cutoff 20, cutoff-5 = 15.
    let mild = score_mmse(16.0, 68, "secondary");
    assert_eq!(mild.interpretation, Interpretation::MildImpairment);
    assert_eq!(mild.risk_level, RiskLevel::Moderate);

    let significant = score_mmse(14.0, 68, "secondary");
    assert_eq!(significant.interpretation, Interpretation::SignificantImpairment);
    assert_eq!(significant.risk_level, RiskLevel::High);
}

#[test]
fn mmse_narrative_reports_direction_of_deviation() {
    let result = score_mmse(22.0, 68, "secondary");
    assert!(result.normative_comparison.contains("below"));
    let high = score_mmse(29.0, 68, "secondary");
    assert!(high.normative_comparison.contains("above"));
}

#[test]
fn moca_education_bonus_is_capped_at_max() {
    let result = score_moca(30.0, 70, "non_educated");
    assert_eq!(result.adjusted_score, 30.0);
    assert_eq!(result.education_adjustment, 0.0);
}

#[test]
fn moca_education_bonus_can_cross_a_threshold() {
    // 25 + 1 = 26 reaches the normal cutoff.
    let result = score_moca(25.0, 50, "primary");
    assert_eq!(result.adjusted_score, 26.0);
    assert_eq!(result.education_adjustment, 1.0);
    assert_eq!(result.interpretation, Interpretation::Normal);
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn moca_secondary_education_gets_no_bonus() {
    let result = score_moca(25.0, 50, "secondary");
    assert_eq!(result.adjusted_score, 25.0);
    assert_eq!(result.education_adjustment, 0.0);
}

#[test]
fn moca_tiers_are_absolute_not_band_relative() {
    assert_eq!(score_moca(26.0, 68, "secondary").interpretation, Interpretation::Normal);
    assert_eq!(
        score_moca(24.0, 68, "secondary").interpretation,
        Interpretation::MildCognitiveImpairment
    );
    assert_eq!(
        score_moca(20.0, 68, "secondary").interpretation,
        Interpretation::ModerateImpairment
    );
    assert_eq!(
        score_moca(10.0, 68, "secondary").interpretation,
        Interpretation::SevereImpairment
    );
    assert_eq!(score_moca(10.0, 68, "secondary").risk_level, RiskLevel::High);
}

#[test]
fn moca_z_score_uses_the_adjusted_score() {
    // 66-75 grade_0-12 row: mean 25.1, std 3.3. Adjusted = 24.
    let result = score_moca(23.0, 70, "primary");
    assert!((result.z_score - (24.0 - 25.1) / 3.3).abs() < TOL);
}

#[test]
fn digit_span_scores_against_age_norms() {
    // 30-34 forward: mean 6.2, std 1.1.
    let result = score_digit_span(6.0, 30, SpanDirection::Forward);
    assert_eq!(result.instrument_id, "digit_span_forward");
    assert_eq!(result.expected_mean, 6.2);
    assert_eq!(result.interpretation, Interpretation::Normal);
    assert!(result.clinical_cutoff.is_none());
}

#[test]
fn digit_span_backward_tiers_on_z() {
    // 30-34 backward: mean 4.7, std 1.1 → raw 3 gives z ≈ -1.55.
    let result = score_digit_span(3.0, 30, SpanDirection::Backward);
    assert_eq!(result.instrument_id, "digit_span_backward");
    assert_eq!(result.interpretation, Interpretation::Borderline);
    assert_eq!(result.risk_level, RiskLevel::Mild);
}

#[test]
fn digit_span_clamps_ages_outside_the_table() {
    let young = score_digit_span(6.0, 12, SpanDirection::Forward);
    assert_eq!(young.expected_mean, 6.0); // 16-17 band
    let old = score_digit_span(4.0, 101, SpanDirection::Forward);
    assert_eq!(old.expected_mean, 4.9); // 85-89 band
}

#[test]
fn semantic_fluency_tiers_follow_the_cutoffs() {
    // 70-79: mean 15, std 4.5, cutoff 8.
    assert_eq!(score_semantic_fluency(15.0, 72).interpretation, Interpretation::Normal);
    assert_eq!(score_semantic_fluency(10.0, 72).interpretation, Interpretation::Borderline);
    assert_eq!(score_semantic_fluency(5.0, 72).interpretation, Interpretation::MildImpairment);
    assert_eq!(
        score_semantic_fluency(2.0, 72).interpretation,
        Interpretation::SignificantImpairment
    );
}
