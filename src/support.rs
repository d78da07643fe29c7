//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric invariants.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod units;
