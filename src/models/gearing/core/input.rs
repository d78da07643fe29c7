use std::ops::Deref;

use crate::support::constraint::{
    ClosedInterval, Constrained, ConstraintResult, IntervalBounds, StrictlyPositive,
};
use uom::si::{f64::Length, length::inch};

/// Tooth count of the front chainring.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrontTeeth(Constrained<u32, StrictlyPositive>);

impl FrontTeeth {
    /// Create a [`FrontTeeth`] from a tooth count.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the tooth count is zero.
    pub fn new(teeth: u32) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(teeth)?))
    }
}

impl Deref for FrontTeeth {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Wheel diameter used for gear-inch and circumference calculations.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WheelDiameter(Constrained<Length, StrictlyPositive>);

impl WheelDiameter {
    /// Create a [`WheelDiameter`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::length::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = Length::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`WheelDiameter`] from a quantity with length units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Length) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`WheelDiameter`] without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the quantity is strictly positive.
    #[must_use]
    pub(crate) fn new_unchecked(quantity: Length) -> Self {
        Self(Constrained::new_unchecked(quantity))
    }
}

impl Deref for WheelDiameter {
    type Target = Length;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Allowed range for a custom wheel diameter, 10 to 60 inches inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomWheelBounds;

impl IntervalBounds<Length> for CustomWheelBounds {
    fn lower() -> Length {
        Length::new::<inch>(10.0)
    }

    fn upper() -> Length {
        Length::new::<inch>(60.0)
    }
}

/// Wheel size selected for a calculation.
///
/// Both variants resolve to a single [`WheelDiameter`] before any gear math
/// runs; the variant only records where the diameter came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelSize {
    /// One of the common sizes offered to the rider.
    Predefined(WheelDiameter),

    /// A diameter the rider entered by hand.
    Custom(WheelDiameter),
}

impl WheelSize {
    /// Create a [`WheelSize::Custom`] after checking the diameter lies in
    /// the [`CustomWheelBounds`] range.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the diameter is outside 10 to 60 inches or is `NaN`.
    pub fn custom(diameter: Length) -> ConstraintResult<Self> {
        let diameter = ClosedInterval::<CustomWheelBounds>::new(diameter)?.into_inner();
        Ok(Self::Custom(WheelDiameter::from_quantity(diameter)?))
    }

    /// Returns the resolved wheel diameter.
    #[must_use]
    pub fn diameter(&self) -> WheelDiameter {
        match self {
            Self::Predefined(diameter) | Self::Custom(diameter) => *diameter,
        }
    }

    /// Returns `true` if the diameter was entered by hand.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// Everything needed to compute one gear table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearInput {
    /// Front chainring tooth count.
    pub front_teeth: FrontTeeth,

    /// Wheel size the table is computed for.
    pub wheel: WheelSize,
}

impl GearInput {
    #[must_use]
    pub fn new(front_teeth: FrontTeeth, wheel: WheelSize) -> Self {
        Self { front_teeth, wheel }
    }
}
