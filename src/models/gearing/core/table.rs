//! Gear table generation.

use uom::si::f64::{Frequency, Length, Ratio, Velocity};

use super::{
    GearInput, GearMathError, TableConfig, WheelDiameter, gear_inch, gear_ratio, rpm_for_speed,
    wheel_circumference,
};

/// Cadence required to hold one reference speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedCadence {
    /// Road speed.
    pub speed: Velocity,

    /// Crank cadence at that speed.
    pub cadence: Frequency,
}

/// Metrics for a single rear sprocket.
#[derive(Debug, Clone, PartialEq)]
pub struct GearRow {
    /// Rear sprocket tooth count.
    pub rear_teeth: u32,

    /// Front teeth divided by rear teeth.
    pub gear_ratio: Ratio,

    /// Wheel diameter times gear ratio.
    pub gear_inch: Length,

    /// One entry per configured speed, in configuration order.
    pub cadences: Vec<SpeedCadence>,
}

/// A complete gear table for one [`GearInput`].
///
/// Rows are ordered by ascending rear tooth count.
#[derive(Debug, Clone, PartialEq)]
pub struct GearTable {
    wheel_diameter: WheelDiameter,
    circumference: Length,
    rows: Vec<GearRow>,
}

impl GearTable {
    /// Diameter of the wheel the table was computed for.
    #[must_use]
    pub fn wheel_diameter(&self) -> WheelDiameter {
        self.wheel_diameter
    }

    /// Circumference of the wheel the table was computed for.
    #[must_use]
    pub fn circumference(&self) -> Length {
        self.circumference
    }

    #[must_use]
    pub fn rows(&self) -> &[GearRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row for the given rear sprocket, if the table covers it.
    #[must_use]
    pub fn row(&self, rear_teeth: u32) -> Option<&GearRow> {
        self.rows
            .binary_search_by_key(&rear_teeth, |row| row.rear_teeth)
            .ok()
            .map(|index| &self.rows[index])
    }
}

/// Computes a [`GearTable`] with one row per rear sprocket in `config`.
///
/// # Errors
///
/// Returns a [`GearMathError`] if the rear range includes a zero tooth count.
pub fn generate_table(input: &GearInput, config: &TableConfig) -> Result<GearTable, GearMathError> {
    let wheel_diameter = input.wheel.diameter();
    let circumference = wheel_circumference(wheel_diameter);

    let rows = config
        .rear_teeth()
        .map(|rear_teeth| -> Result<GearRow, GearMathError> {
            let ratio = gear_ratio(input.front_teeth, rear_teeth)?;
            let cadences = config
                .speeds()
                .iter()
                .map(|speed| -> Result<SpeedCadence, GearMathError> {
                    let speed = *speed.as_ref();
                    let cadence = rpm_for_speed(ratio, speed, circumference)?;
                    Ok(SpeedCadence { speed, cadence })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(GearRow {
                rear_teeth,
                gear_ratio: ratio,
                gear_inch: gear_inch(wheel_diameter, ratio),
                cadences,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GearTable {
        wheel_diameter,
        circumference,
        rows,
    })
}
