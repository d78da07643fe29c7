//! # Gear Tables
//!
//! Bicycle gear ratio, gear-inch, and cadence tables, built as a
//! [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! For a front chainring and a wheel size, the crate computes one row per rear
//! sprocket (9T to 60T by default) holding the gear ratio, the gear-inch, and
//! the pedalling cadence needed to ride at each reference speed
//! (5, 10, 20, 30, and 40 km/h by default).
//!
//! ## Crate layout
//!
//! - [`models`]: The gearing model and its [`twine_core::Model`] adapter.
//! - [`calculator`]: Input validation, display formatting, and selection
//!   export for an interactive front end.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific utility code remains private.

pub mod calculator;
pub mod models;
pub mod support;
