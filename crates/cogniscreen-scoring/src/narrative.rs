//! Clinician-facing narrative strings attached to results. Wording matches
//! previously issued reports and should change only with clinical review.

use cogniscreen_core::models::score::RiskLevel;

pub fn normative_comparison(z: f64) -> String {
    let direction = if z > 0.0 { "above" } else { "below" };
    format!(
        "Score is {:.1} standard deviations {} age/education expected mean",
        z.abs(),
        direction
    )
}

pub fn mmse_significance(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => {
            "Score within normal limits for age and education. Continue routine monitoring."
        }
        RiskLevel::Mild => {
            "Borderline performance. Consider follow-up in 6-12 months or additional testing if clinical concerns."
        }
        RiskLevel::Moderate => {
            "Score suggests mild cognitive impairment. Recommend comprehensive neuropsychological evaluation."
        }
        RiskLevel::High => {
            "Score indicates significant impairment. Urgent referral for medical evaluation recommended."
        }
    }
}

pub fn moca_significance(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => {
            "Score within normal limits. MoCA shows good cognitive function across domains."
        }
        RiskLevel::Mild => {
            "Score suggests possible mild cognitive impairment. Consider detailed assessment of specific domains."
        }
        RiskLevel::Moderate => {
            "Score indicates moderate cognitive impairment. Comprehensive evaluation and medical consultation recommended."
        }
        RiskLevel::High => {
            "Score suggests significant impairment across multiple domains. Immediate medical evaluation warranted."
        }
    }
}

/// Significance wording for single-domain instruments (digit span, fluency).
pub fn focal_significance(risk: RiskLevel, domain: &str) -> String {
    match risk {
        RiskLevel::Low => format!("{domain} performance within normal limits for age."),
        RiskLevel::Mild => {
            format!("{domain} performance mildly below age expectations. Monitor at next visit.")
        }
        RiskLevel::Moderate => format!(
            "{domain} performance moderately below age expectations. Further evaluation of this domain recommended."
        ),
        RiskLevel::High => format!(
            "{domain} performance substantially below age expectations. Comprehensive evaluation recommended."
        ),
    }
}

pub fn composite_interpretation(score: f64, risk: RiskLevel) -> String {
    match risk {
        RiskLevel::Low => format!(
            "Composite cognitive score ({score:.1}) indicates preserved cognitive function across tested domains."
        ),
        RiskLevel::Mild => format!(
            "Composite cognitive score ({score:.1}) suggests mild cognitive changes. Monitor closely and consider lifestyle interventions."
        ),
        RiskLevel::Moderate => format!(
            "Composite cognitive score ({score:.1}) indicates moderate cognitive impairment. Medical evaluation recommended."
        ),
        RiskLevel::High => format!(
            "Composite cognitive score ({score:.1}) suggests significant cognitive decline. Immediate comprehensive assessment needed."
        ),
    }
}
