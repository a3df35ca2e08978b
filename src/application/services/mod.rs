//! Shortener services: redirect resolution, request dispatch, legacy fallback
//! and shortlink generation.

pub mod classifier;
pub mod dispatcher;
pub mod legacy;
pub mod resolver;
pub mod shortlink;

pub use classifier::{ClassifyError, TypeClassifier, UnknownFormatPolicy};
pub use dispatcher::{Dispatch, RequestDispatcher};
pub use legacy::LegacyFallback;
pub use resolver::{RedirectResolver, amazon_product_url};
pub use shortlink::{QueriedObject, ShortlinkContext, ShortlinkGenerator, ShortlinkSettings};
