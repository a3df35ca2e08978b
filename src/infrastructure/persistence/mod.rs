//! Resource repository implementations.
//!
//! # Repositories
//!
//! - [`PgResourceRepository`] - Reads the host's `resources` table through SQLx
//! - [`InMemoryResourceRepository`] - Process-local map for tests, the CLI and
//!   deployments without a database

pub mod memory_resource_repository;
pub mod pg_resource_repository;

pub use memory_resource_repository::InMemoryResourceRepository;
pub use pg_resource_repository::PgResourceRepository;
