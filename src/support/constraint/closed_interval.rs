use std::{cmp::Ordering, marker::PhantomData};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the inclusive bounds for a [`ClosedInterval`] constraint.
///
/// Implement this trait on a zero-sized type to name an interval.
/// Implementations should ensure that `lower() ≤ upper()` under the type's
/// `PartialOrd` so the interval is well-formed.
pub trait IntervalBounds<T> {
    /// Smallest allowed value.
    fn lower() -> T;

    /// Largest allowed value.
    fn upper() -> T;
}

/// Marker type enforcing that a value lies in the closed interval `[lower, upper]`
/// named by `B`.
///
/// # Examples
///
/// ```
/// use gear_tables::support::constraint::{ClosedInterval, ConstraintError, IntervalBounds};
///
/// #[derive(Debug)]
/// struct Chainring;
///
/// impl IntervalBounds<u32> for Chainring {
///     fn lower() -> u32 { 20 }
///     fn upper() -> u32 { 60 }
/// }
///
/// let teeth = ClosedInterval::<Chainring>::new(52).unwrap();
/// assert_eq!(teeth.into_inner(), 52);
///
/// assert!(ClosedInterval::<Chainring>::new(20).is_ok());
/// assert!(ClosedInterval::<Chainring>::new(60).is_ok());
/// assert_eq!(
///     ClosedInterval::<Chainring>::new(19).unwrap_err(),
///     ConstraintError::BelowMinimum,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<B> {
    _bounds: PhantomData<B>,
}

impl<B> ClosedInterval<B> {
    /// Constructs `Constrained<T, ClosedInterval<B>>` if `lower ≤ value ≤ upper`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than the lower bound.
    /// - [`ConstraintError::AboveMaximum`] if greater than the upper bound.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T>(value: T) -> Result<Constrained<T, ClosedInterval<B>>, ConstraintError>
    where
        T: PartialOrd,
        B: IntervalBounds<T>,
    {
        Constrained::<T, ClosedInterval<B>>::new(value)
    }

    /// Returns the lower bound as a constrained value.
    #[must_use]
    pub fn lower<T>() -> Constrained<T, ClosedInterval<B>>
    where
        T: PartialOrd,
        B: IntervalBounds<T>,
    {
        Constrained::<T, ClosedInterval<B>> {
            value: B::lower(),
            _marker: PhantomData,
        }
    }

    /// Returns the upper bound as a constrained value.
    #[must_use]
    pub fn upper<T>() -> Constrained<T, ClosedInterval<B>>
    where
        T: PartialOrd,
        B: IntervalBounds<T>,
    {
        Constrained::<T, ClosedInterval<B>> {
            value: B::upper(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd, B: IntervalBounds<T>> Constraint<T> for ClosedInterval<B> {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (
            value.partial_cmp(&B::lower()),
            value.partial_cmp(&B::upper()),
        ) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
