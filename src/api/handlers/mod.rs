//! HTTP request handlers for public endpoints.

pub mod health;
pub mod short_path;
pub mod shortlink;

pub use health::health_handler;
pub use short_path::short_path_handler;
pub use shortlink::shortlink_handler;
