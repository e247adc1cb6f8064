use cogniscreen_core::error::CoreError;
use cogniscreen_core::models::bands::EducationBand;
use cogniscreen_core::models::pattern::OverallPattern;
use cogniscreen_core::models::profile::SubjectProfile;
use cogniscreen_core::models::report::ClinicalReport;
use cogniscreen_core::models::score::{Interpretation, RiskLevel};
use jiff::civil::date;

#[test]
fn risk_and_interpretation_serialize_as_report_strings() {
    assert_eq!(serde_json::to_value(RiskLevel::Low).unwrap(), "low");
    assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), "high");
    assert_eq!(
        serde_json::to_value(Interpretation::MildImpairment).unwrap(),
        "mild_impairment"
    );
    assert_eq!(
        serde_json::to_value(Interpretation::MildCognitiveImpairment).unwrap(),
        "mild_cognitive_impairment"
    );
    assert_eq!(
        serde_json::to_value(OverallPattern::MemoryPredominant).unwrap(),
        "memory_predominant"
    );
}

#[test]
fn education_band_keys_match_the_normative_tables() {
    assert_eq!(EducationBand::Grade0To4.key(), "grade_0-4");
    assert_eq!(EducationBand::College.key(), "college");
}

#[test]
fn profile_derives_age_from_birth_date() {
    let profile =
        SubjectProfile::from_birth_date("1956-03-15", date(2024, 6, 1), "secondary").unwrap();
    assert_eq!(profile.age, 68);
    assert_eq!(profile.education_band(), EducationBand::Grade9To12);
}

#[test]
fn profile_age_is_zero_before_birth() {
    let profile =
        SubjectProfile::from_birth_date("2030-01-01", date(2024, 6, 1), "secondary").unwrap();
    assert_eq!(profile.age, 0);
}

#[test]
fn malformed_birth_date_is_a_date_error() {
    let err = SubjectProfile::from_birth_date("not-a-date", date(2024, 6, 1), "secondary")
        .expect_err("should not parse");
    assert!(matches!(err, CoreError::InvalidDate(_)));
}

#[test]
fn new_report_starts_with_no_sections() {
    let report = ClinicalReport::new(SubjectProfile::new(68, "secondary"));
    assert!(report.mmse.is_none());
    assert!(report.composite.is_none());
    assert!(report.error_patterns.is_none());
}

#[test]
fn report_serializes_with_snake_case_fields() {
    let report = ClinicalReport::new(SubjectProfile::new(68, "secondary"));
    let json = report.to_json().unwrap();
    assert!(json.contains("\"education_label\""));
    assert!(json.contains("\"digit_span_forward\""));
    assert!(json.contains("\"created_at\""));
}
