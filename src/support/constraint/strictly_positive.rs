use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Tooth counts and wheel diameters carry this constraint.
///
/// You can construct a value constrained to be strictly positive using
/// either the generic [`Constrained::new`] method or the convenient
/// [`StrictlyPositive::new`] associated function.
///
/// # Examples
///
/// ```
/// use gear_tables::support::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let teeth = Constrained::<u32, StrictlyPositive>::new(34).unwrap();
/// assert_eq!(teeth.into_inner(), 34);
///
/// // Associated constructor:
/// let diameter = StrictlyPositive::new(27.5).unwrap();
/// assert_eq!(diameter.into_inner(), 27.5);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::inch};

    #[test]
    fn tooth_counts() {
        let front = Constrained::<u32, StrictlyPositive>::new(1).unwrap();
        assert_eq!(front.into_inner(), 1);

        let rear = StrictlyPositive::new(60u32).unwrap();
        assert_eq!(rear.as_ref(), &60);

        assert_eq!(StrictlyPositive::new(0u32), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-2), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert!(StrictlyPositive::new(0.0).is_err());
        assert!(StrictlyPositive::new(-5.0).is_err());
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn lengths() {
        let diameter = Length::new::<inch>(29.0);
        assert!(StrictlyPositive::new(diameter).is_ok());

        let diameter = Length::new::<inch>(0.0);
        assert!(StrictlyPositive::new(diameter).is_err());

        let diameter = Length::new::<inch>(-26.0);
        assert!(StrictlyPositive::new(diameter).is_err());
    }
}
