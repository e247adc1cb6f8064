//! MMSE section-level error pattern analysis.
//!
//! Each section is checked against a fixed clinical threshold and failures
//! accumulate as flags in one of five domain buckets. The overall pattern is
//! then classified by a strict priority order; reordering the checks changes
//! clinical output, so they must stay as written.

use cogniscreen_core::models::pattern::{
    ErrorPatternResult, OverallPattern, SectionScore, SectionScores,
};

// Full-credit sentinels. A section that was never administered must not
// read as a deficit.
const FULL_REGISTRATION: f64 = 3.0;
const FULL_RECALL: f64 = 3.0;
const FULL_ATTENTION: f64 = 5.0;
const FULL_NAMING: f64 = 2.0;
const FULL_REPETITION: f64 = 1.0;
const FULL_ORIENTATION: f64 = 5.0;

fn score_or(section: Option<SectionScore>, full_credit: f64) -> f64 {
    section.map_or(full_credit, |s| s.score)
}

/// Classify the qualitative deficit pattern across the scored MMSE sections.
pub fn analyze_error_patterns(sections: &SectionScores) -> ErrorPatternResult {
    let mut memory = Vec::new();
    let mut attention = Vec::new();
    let mut language = Vec::new();

    let registration = score_or(sections.registration, FULL_REGISTRATION);
    let recall = score_or(sections.delayed_recall, FULL_RECALL);
    if registration < 3.0 {
        memory.push("Immediate memory registration deficit".to_string());
    }
    if recall < 2.0 {
        memory.push("Delayed recall impairment".to_string());
    }
    if recall < registration {
        memory.push("Memory consolidation deficit".to_string());
    }

    let attention_score = score_or(sections.attention_calculation, FULL_ATTENTION);
    if attention_score < 3.0 {
        attention.push("Sustained attention impairment".to_string());
    }
    if attention_score < 2.0 {
        attention.push("Working memory deficit".to_string());
    }

    let naming = score_or(sections.language_naming, FULL_NAMING);
    let repetition = score_or(sections.language_repetition, FULL_REPETITION);
    if naming < 2.0 {
        language.push("Object naming difficulty".to_string());
    }
    if repetition < 1.0 {
        language.push("Complex phrase repetition deficit".to_string());
    }

    // Orientation failures read as attentional findings, following the
    // section groupings of the source battery.
    let time = score_or(sections.orientation_time, FULL_ORIENTATION);
    let place = score_or(sections.orientation_place, FULL_ORIENTATION);
    if time < 4.0 {
        attention.push("Temporal orientation impairment".to_string());
    }
    if place < 4.0 {
        attention.push("Spatial orientation impairment".to_string());
    }

    let total = memory.len() + attention.len() + language.len();
    let overall_pattern = if total == 0 {
        OverallPattern::NoSignificantPattern
    } else if memory.len() >= 2 {
        OverallPattern::MemoryPredominant
    } else if attention.len() >= 2 {
        OverallPattern::AttentionExecutive
    } else if !language.is_empty() {
        OverallPattern::LanguagePredominant
    } else {
        OverallPattern::Mixed
    };

    ErrorPatternResult {
        memory_errors: memory,
        attention_errors: attention,
        language_errors: language,
        visuospatial_errors: Vec::new(),
        executive_errors: Vec::new(),
        overall_pattern,
    }
}
