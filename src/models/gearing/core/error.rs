use std::fmt;

use thiserror::Error;

use crate::support::constraint::{Constrained, ConstraintError, NonZero};

/// Errors that can occur while computing gear metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GearMathError {
    /// A quotient was requested with a zero divisor.
    #[error("division by zero: {divisor} is zero")]
    DivisionByZero {
        /// The quantity that was zero.
        divisor: Divisor,
    },

    /// A divisor was `NaN`.
    #[error("{divisor} is not a number")]
    NotANumber {
        /// The quantity that was `NaN`.
        divisor: Divisor,
    },

    /// The configured rear sprocket range contains no tooth counts.
    #[error("rear sprocket range is empty")]
    EmptyRearRange,
}

/// Names the divisor a [`GearMathError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Divisor {
    RearTeeth,
    GearRatio,
    Circumference,
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RearTeeth => "rear tooth count",
            Self::GearRatio => "gear ratio",
            Self::Circumference => "wheel circumference",
        })
    }
}

impl GearMathError {
    /// Checks that `value` can be used as the named divisor.
    ///
    /// # Errors
    ///
    /// Returns [`GearMathError::DivisionByZero`] for zero and
    /// [`GearMathError::NotANumber`] for `NaN`.
    pub(super) fn check_divisor<T>(
        value: T,
        divisor: Divisor,
    ) -> Result<Constrained<T, NonZero>, Self>
    where
        T: PartialOrd + num_traits::Zero,
    {
        NonZero::new(value).map_err(|err| match err {
            ConstraintError::NotANumber => Self::NotANumber { divisor },
            _ => Self::DivisionByZero { divisor },
        })
    }
}
