pub mod digit_span;
pub mod fluency;
pub mod mmse;
pub mod moca;
