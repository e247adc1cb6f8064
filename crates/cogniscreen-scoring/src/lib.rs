//! cogniscreen-scoring
//!
//! The deterministic clinical scoring engine: normative score evaluation,
//! error pattern analysis, and composite risk aggregation. Everything here
//! is a pure function over the compiled-in reference tables — no I/O, no
//! network, safe to call from any number of concurrent requests. The LLM
//! analysis layer upstream may consult these results but none of the numbers
//! here depend on it.

pub mod composite;
pub mod evaluator;
pub mod narrative;
pub mod patterns;

pub use composite::{composite_score, default_weights};
pub use evaluator::{
    percentile, score_digit_span, score_mmse, score_moca, score_semantic_fluency, z_score,
};
pub use patterns::analyze_error_patterns;
