//! Utility functions for short-code encoding and path handling.
//!
//! - [`base60`] - Sexagesimal codec for resource IDs
//! - [`legacy_id`] - Decimal and base-32 IDs from the old short URL scheme
//! - [`path`] - Short path matching, splitting and trailing-slash helpers

pub mod base60;
pub mod legacy_id;
pub mod path;
