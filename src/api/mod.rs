//! HTTP layer for the public redirect surface.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
