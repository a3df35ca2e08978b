//! Domain layer containing entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Resources, type prefixes and short paths
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Resolution and generation logic lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
