use thiserror::Error;

use crate::{models::gearing::GearMathError, support::constraint::ConstraintError};

/// Errors raised while handling one calculation request.
///
/// None of these are fatal: the request is abandoned and any previously
/// displayed table stays as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// The front teeth text is not a whole number of at least one.
    #[error("invalid front gear teeth {input:?}: enter a valid positive integer")]
    InvalidFrontTeeth { input: String },

    /// The rider dismissed the custom wheel size prompt.
    #[error("custom wheel size entry was cancelled")]
    WheelSizeCancelled,

    /// The custom wheel diameter is outside the accepted range.
    #[error("custom wheel diameter {inches} in is not between 10 and 60 inches")]
    InvalidWheelSize {
        inches: f64,
        #[source]
        source: ConstraintError,
    },

    /// The gear math rejected its inputs.
    #[error(transparent)]
    Math(#[from] GearMathError),
}

impl CalculationError {
    /// Returns `true` if the request was abandoned by the rider rather than
    /// rejected, so the front end should abort without showing an error.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::WheelSizeCancelled)
    }
}
