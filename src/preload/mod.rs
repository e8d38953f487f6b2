//! Preload pipeline: asset sources, the in-memory cache, and the
//! fire-and-join preload operation that gates gameplay start.

pub mod cache;
pub mod manager;
pub mod source;

pub use cache::PreloadCache;
pub use manager::preload;
pub use source::{AssetHandle, AssetSource, FsSource, MemorySource};
