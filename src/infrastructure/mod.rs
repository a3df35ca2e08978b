//! Infrastructure layer for external integrations.
//!
//! Implements the resource store contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory resource repositories

pub mod persistence;
