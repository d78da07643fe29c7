//! Bicycle gearing model.
//!
//! Converts a front chainring, a wheel size, and a range of rear sprockets into
//! a table of gear ratios, gear-inches, and the cadence needed to hold each
//! reference road speed.
//!
//! The computational core is in the internal `core` module. [`GearTableModel`]
//! exposes it as a [`twine_core::Model`].
//!
//! # Example
//!
//! ```
//! use gear_tables::models::gearing::{
//!     FrontTeeth, GearInput, GearTableModel, TableConfig, WheelDiameter, WheelSize,
//! };
//! use gear_tables::support::units::Cadence;
//! use twine_core::Model;
//! use uom::si::{length::inch, ratio::ratio};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = GearTableModel::new(TableConfig::default());
//! let input = GearInput::new(
//!     FrontTeeth::new(50)?,
//!     WheelSize::Predefined(WheelDiameter::new::<inch>(29.0)?),
//! );
//!
//! let table = model.call(&input)?;
//! assert_eq!(table.len(), 52);
//!
//! let row = table.row(15).expect("15T is in the reference range");
//! assert!((row.gear_ratio.get::<ratio>() - 50.0 / 15.0).abs() < 1e-9);
//! assert!((row.cadences[2].cadence.rpm() - 43.21).abs() < 0.01);
//! # Ok(())
//! # }
//! ```

mod core;

pub use self::core::{
    CustomWheelBounds, Divisor, FrontTeeth, GearInput, GearMathError, GearRow, GearTable,
    REFERENCE_REAR_TEETH, REFERENCE_SPEEDS_KMH, ReferenceSpeed, SpeedCadence, TableConfig,
    WheelDiameter, WheelSize, gear_inch, gear_ratio, generate_table, rpm_for_speed,
    wheel_circumference,
};

use twine_core::Model;

/// [`Model`] adapter that computes a [`GearTable`] for a fixed [`TableConfig`].
///
/// Each call is independent: the model keeps no state between calls beyond
/// its configuration.
#[derive(Debug, Clone, Default)]
pub struct GearTableModel {
    config: TableConfig,
}

impl GearTableModel {
    /// Creates a model that generates tables with the given configuration.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    /// Returns the table configuration used by this model.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
}

impl Model for GearTableModel {
    type Input = GearInput;
    type Output = GearTable;
    type Error = GearMathError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        generate_table(input, &self.config)
    }
}
