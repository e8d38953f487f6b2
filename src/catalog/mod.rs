//! Asset catalog: categories, asset references, and numbered-file discovery.
//!
//! The catalog is the game's only configuration — an ordered map of
//! category → {answer label, asset list}. Its iteration order fixes the
//! sweep-phase presentation order, so it must be deterministic.

pub mod category;
pub mod probe;
pub mod registry;

pub use category::{AssetRef, Category, CategoryId};
pub use probe::{probe_numbered, DEFAULT_PROBE_CAP};
pub use registry::Catalog;
