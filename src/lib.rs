//! Build provenance reporting.
//!
//! Five fields (version, revision, date, user, url) are stamped into the
//! binary by `build.rs` and exposed three ways: the [`version`] read API,
//! the [`registry`] introspection registry for monitoring agents, and the
//! console report in [`report`]. Missing metadata is never an error; every
//! field degrades to the `"Unknown"` sentinel.

pub mod metadata;
pub mod registry;
pub mod report;
pub mod version;

/// Display name used in formatted provenance strings.
pub const PRODUCT_NAME: &str = env!("CARGO_PKG_NAME");
