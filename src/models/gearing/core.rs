//! Gear ratio, gear-inch, and cadence computation.
//!
//! Everything here is a pure function of its arguments. Inputs arrive already
//! validated through constrained types, so the only failures left are the
//! division guards, which cannot trigger for tables built from a
//! [`TableConfig`] with positive rear tooth counts.

mod config;
mod error;
mod input;
mod math;
mod table;

pub use config::{REFERENCE_REAR_TEETH, REFERENCE_SPEEDS_KMH, ReferenceSpeed, TableConfig};
pub use error::{Divisor, GearMathError};
pub use input::{CustomWheelBounds, FrontTeeth, GearInput, WheelDiameter, WheelSize};
pub use math::{gear_inch, gear_ratio, rpm_for_speed, wheel_circumference};
pub use table::{GearRow, GearTable, SpeedCadence, generate_table};
