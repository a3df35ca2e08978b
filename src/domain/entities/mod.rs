//! Core domain entities.
//!
//! Entities are plain data structures. Nothing here is persisted by the
//! shortener itself: resources belong to the host, and short paths are
//! parsed per request.
//!
//! # Entity Types
//!
//! - [`Resource`] - A host-managed post, page or attachment
//! - [`ResourceRef`] - A resource given either by ID or as a loaded record
//! - [`TypePrefix`] - Single-letter short path namespace
//! - [`ShortPath`] - A parsed `{type}/{id}` request path
//! - [`ItemPath`] - The `{subtype}/{id}` tail of an `/i/` path

pub mod resource;
pub mod short_path;

pub use resource::{Resource, ResourceId, ResourceKind, ResourceRef};
pub use short_path::{InvalidTypePrefix, ItemPath, ShortPath, TypePrefix};
