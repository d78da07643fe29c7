//! Boundary layer between a rider-facing front end and the gearing model.
//!
//! The gearing model only accepts validated, typed values. This module turns
//! raw rider input into those values, renders results as display text, and
//! owns the lifecycle of the last displayed table:
//!
//! - [`parse_front_teeth`] validates the chainring text.
//! - [`WheelSelection`] is the wheel size dropdown, with a [`CustomWheelPrompt`]
//!   for the "Other" entry.
//! - [`render_table`] formats a [`GearTable`](crate::models::gearing::GearTable)
//!   to two decimals.
//! - [`copy_selection`] exports rectangular cell ranges as tab-separated text.
//! - [`Calculator`] ties these together for one interactive session.
//!
//! # Example
//!
//! ```
//! use gear_tables::calculator::{Calculator, CellRange, WheelSelection};
//!
//! let mut calculator = Calculator::default();
//! let table = calculator
//!     .calculate("50", WheelSelection::Road700C, &mut || None)
//!     .unwrap();
//! assert_eq!(table.row_count(), 52);
//!
//! // Rows for 15T and 16T, rear gear and gear ratio columns.
//! let copied = calculator.copy(&[CellRange::new(6, 0, 7, 0), CellRange::new(6, 2, 7, 2)]);
//! assert_eq!(copied.as_deref(), Some("15T\n16T\n3.33\n3.13\n"));
//! ```

mod error;
mod front_teeth;
mod render;
mod selection;
mod session;
mod wheel;

pub use error::CalculationError;
pub use front_teeth::parse_front_teeth;
pub use render::{
    FIXED_COLUMN_HEADERS, RenderedTable, column_headers, format_two_decimals, render_table,
};
pub use selection::{CellRange, ParseCellRangeError, copy_selection};
pub use session::Calculator;
pub use wheel::{CustomWheelPrompt, ParseWheelSelectionError, WheelSelection};
