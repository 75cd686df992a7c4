//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints for validating inputs.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod units;
