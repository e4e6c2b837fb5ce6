//! Route extraction for external consumers.

mod extractor;

pub use extractor::RouteExtractor;
