//! Repository trait definitions for the domain layer.
//!
//! The resource store is owned by the host application; the shortener only
//! reads from it through [`ResourceRepository`].
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod resource_repository;

pub use resource_repository::ResourceRepository;

#[cfg(test)]
pub use resource_repository::MockResourceRepository;
