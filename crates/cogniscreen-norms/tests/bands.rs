use cogniscreen_core::models::bands::EducationBand;
use cogniscreen_norms::instruments::digit_span::{DigitSpanBackward, DigitSpanForward};
use cogniscreen_norms::instruments::fluency::SemanticFluencyAnimals;
use cogniscreen_norms::instruments::mmse::Mmse;
use cogniscreen_norms::instruments::moca::Moca;
use cogniscreen_norms::{NormedInstrument, all_instruments};

#[test]
fn bands_are_contiguous_and_non_overlapping() {
    for instrument in all_instruments() {
        let bands = instrument.age_bands();
        for age in 0..=130u32 {
            let matches = bands.iter().filter(|b| b.contains(age)).count();
            assert!(
                matches <= 1,
                "{}: age {} matched {} bands",
                instrument.id(),
                age,
                matches
            );
        }
        // No gaps between consecutive bands.
        for pair in bands.windows(2) {
            let max = pair[0].max.expect("only the last band may be open-ended");
            assert_eq!(max + 1, pair[1].min, "{}: gap after {}", instrument.id(), pair[0].key);
        }
    }
}

#[test]
fn every_age_resolves_to_some_band() {
    for instrument in all_instruments() {
        for age in 0..=130u32 {
            // Must never panic and must hand back a band from the table.
            let band = instrument.resolve_age_band(age);
            assert!(instrument.age_bands().iter().any(|b| b.key == band.key));
        }
    }
}

#[test]
fn ages_outside_the_table_clamp_to_the_nearest_band() {
    assert_eq!(DigitSpanForward.resolve_age_band(12).key, "16-17");
    assert_eq!(DigitSpanForward.resolve_age_band(101).key, "85-89");
    assert_eq!(DigitSpanBackward.resolve_age_band(0).key, "16-17");
    assert_eq!(Mmse.resolve_age_band(10).key, "18-24");
    assert_eq!(Mmse.resolve_age_band(130).key, "80+");
    assert_eq!(SemanticFluencyAnimals.resolve_age_band(19).key, "20-39");
}

#[test]
fn mmse_age_bands_resolve_by_decade() {
    assert_eq!(Mmse.resolve_age_band(68).key, "60-69");
    assert_eq!(Mmse.resolve_age_band(70).key, "70-79");
    assert_eq!(Mmse.resolve_age_band(80).key, "80+");
}

#[test]
fn moca_uses_three_coarse_bands() {
    assert_eq!(Moca.resolve_age_band(30).key, "18-65");
    assert_eq!(Moca.resolve_age_band(66).key, "66-75");
    assert_eq!(Moca.resolve_age_band(76).key, "76+");
}

#[test]
fn education_labels_map_onto_four_buckets() {
    assert_eq!(EducationBand::from_label("non_educated"), EducationBand::Grade0To4);
    assert_eq!(EducationBand::from_label("primary"), EducationBand::Grade5To8);
    assert_eq!(EducationBand::from_label("secondary"), EducationBand::Grade9To12);
    assert_eq!(EducationBand::from_label("graduate"), EducationBand::College);
    assert_eq!(EducationBand::from_label("postgraduate"), EducationBand::College);
}

#[test]
fn unrecognized_education_defaults_to_secondary() {
    assert_eq!(EducationBand::from_label("PhD"), EducationBand::Grade9To12);
    assert_eq!(EducationBand::from_label(""), EducationBand::Grade9To12);
}
