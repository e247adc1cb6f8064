use thiserror::Error;

use crate::table::ValidationError;

#[derive(Debug, Error)]
pub enum NormsError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("score validation failed: {0}")]
    Validation(#[from] ValidationError),
}
