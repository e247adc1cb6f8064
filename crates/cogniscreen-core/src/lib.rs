//! cogniscreen-core
//!
//! Pure domain types for the cognitive screening engine. No I/O, no network —
//! this is the shared vocabulary of the cogniscreen system: band enums, risk
//! levels, and the value objects every scoring call produces.

pub mod error;
pub mod models;
