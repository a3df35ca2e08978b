//! Application layer: extension hooks and the services built on them.
//!
//! Services consume the [`crate::domain::repositories::ResourceRepository`]
//! trait and the shared [`hooks::Hooks`] registry, and expose a small API
//! to the HTTP handlers and the `humctl` binary.
//!
//! # Available Services
//!
//! - [`services::RequestDispatcher`] - Short path parsing and redirect with punctuation retry
//! - [`services::RedirectResolver`] - Local, rule, item and hook resolution
//! - [`services::LegacyFallback`] - Redirects for old numeric/base-32 IDs
//! - [`services::ShortlinkGenerator`] - Shortlinks and feed markup for resources
//! - [`services::TypeClassifier`] - Resource to type prefix mapping

pub mod hooks;
pub mod services;
