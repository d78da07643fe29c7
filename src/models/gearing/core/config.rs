use std::ops::RangeInclusive;

use uom::si::{f64::Velocity, velocity::kilometer_per_hour};

use crate::support::constraint::{Constrained, NonNegative};

use super::GearMathError;

/// Rear sprocket tooth counts covered by the reference table.
pub const REFERENCE_REAR_TEETH: RangeInclusive<u32> = 9..=60;

/// Reference road speeds, in km/h, in display order.
pub const REFERENCE_SPEEDS_KMH: [f64; 5] = [5.0, 10.0, 20.0, 30.0, 40.0];

/// A road speed at which cadence is reported.
pub type ReferenceSpeed = Constrained<Velocity, NonNegative>;

/// Configuration for gear table generation.
///
/// The default covers rear sprockets from 9T to 60T and the speeds in
/// [`REFERENCE_SPEEDS_KMH`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    rear_teeth: RangeInclusive<u32>,
    speeds: Vec<ReferenceSpeed>,
}

impl TableConfig {
    /// Creates a configuration from a rear sprocket range and ordered speeds.
    ///
    /// A range that includes zero is accepted here; generating a table from
    /// it fails with a division-by-zero error instead.
    ///
    /// # Errors
    ///
    /// Returns [`GearMathError::EmptyRearRange`] if `rear_teeth` is empty.
    pub fn new(
        rear_teeth: RangeInclusive<u32>,
        speeds: Vec<ReferenceSpeed>,
    ) -> Result<Self, GearMathError> {
        if rear_teeth.is_empty() {
            return Err(GearMathError::EmptyRearRange);
        }
        Ok(Self { rear_teeth, speeds })
    }

    /// Rear sprocket tooth counts, ascending.
    #[must_use]
    pub fn rear_teeth(&self) -> RangeInclusive<u32> {
        self.rear_teeth.clone()
    }

    /// Number of rows a table generated from this configuration will have.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rear_teeth.clone().count()
    }

    /// Reference speeds, in the order cadences are reported.
    #[must_use]
    pub fn speeds(&self) -> &[ReferenceSpeed] {
        &self.speeds
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        let speeds: Vec<ReferenceSpeed> = REFERENCE_SPEEDS_KMH
            .iter()
            .map(|&kmh| Constrained::new_unchecked(Velocity::new::<kilometer_per_hour>(kmh)))
            .collect();

        Self {
            rear_teeth: REFERENCE_REAR_TEETH,
            speeds,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_is_reference_system() {
        let config = TableConfig::default();
        assert_eq!(config.rear_teeth(), 9..=60);
        assert_eq!(config.row_count(), 52);

        let speeds: Vec<f64> = config
            .speeds()
            .iter()
            .map(|speed| speed.as_ref().get::<kilometer_per_hour>())
            .collect();
        assert_eq!(speeds.len(), REFERENCE_SPEEDS_KMH.len());
        for (speed, expected) in speeds.iter().zip(REFERENCE_SPEEDS_KMH) {
            assert_relative_eq!(*speed, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn reference_speeds_are_non_negative() {
        for kmh in REFERENCE_SPEEDS_KMH {
            assert!(NonNegative::new(Velocity::new::<kilometer_per_hour>(kmh)).is_ok());
        }
        assert!(REFERENCE_REAR_TEETH.clone().all(|teeth| teeth > 0));
    }

    #[test]
    fn empty_rear_range_is_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let result = TableConfig::new(20..=10, Vec::new());
        assert_eq!(result, Err(GearMathError::EmptyRearRange));
    }

    #[test]
    fn single_sprocket() {
        let config = TableConfig::new(11..=11, Vec::new()).unwrap();
        assert_eq!(config.row_count(), 1);
        assert!(config.speeds().is_empty());
    }
}
