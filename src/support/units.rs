//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (wheel diameter, road speed,
//! gear ratio, cadence).
//! This module provides extensions that are useful for gearing but aren't included in [`uom`].
//!
//! ## Cadence
//!
//! Pedalling cadence is a [`Frequency`](uom::si::f64::Frequency), but riders
//! quote it in revolutions per minute. The [`Cadence`] trait reads and writes
//! a frequency in RPM:
//!
//! ```
//! use uom::si::{f64::Frequency, frequency::hertz};
//! use gear_tables::support::units::Cadence;
//!
//! let cadence = Frequency::from_rpm(90.0);
//! assert_eq!(cadence.get::<hertz>(), 1.5);
//! assert_eq!(cadence.rpm(), 90.0);
//! ```

mod cadence;

pub use cadence::Cadence;
