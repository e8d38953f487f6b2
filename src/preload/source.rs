//! Asset sources: where pictures come from.
//!
//! The engine treats its asset store as `resolve(path) → resource | failure`.
//! [`FsSource`] serves a directory tree (the usual static-files layout);
//! [`MemorySource`] backs headless hosts and tests.

use std::path::PathBuf;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::AssetError;

/// A loaded asset: cheaply clonable, immutable bytes.
///
/// The engine never interprets the bytes — decoding is the presentation
/// layer's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetHandle {
    bytes: Arc<[u8]>,
}

impl AssetHandle {
    /// Wrap loaded bytes in a handle.
    #[must_use]
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// The raw bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for zero-length assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for AssetHandle {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for AssetHandle {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

/// Content-addressable-by-path asset store.
///
/// `Sync` is required because the preload manager resolves every path
/// concurrently from worker threads.
pub trait AssetSource: Sync {
    /// Resolve a path to a loaded asset.
    fn resolve(&self, path: &str) -> Result<AssetHandle, AssetError>;
}

/// Asset source backed by a directory tree.
#[derive(Clone, Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Serve assets from the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for FsSource {
    fn resolve(&self, path: &str) -> Result<AssetHandle, AssetError> {
        let full = self.root.join(path);
        match std::fs::read(&full) {
            Ok(bytes) => Ok(AssetHandle::from(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AssetError::NotFound {
                path: path.to_string(),
            }),
            Err(e) => Err(AssetError::Io {
                path: path.to_string(),
                source: e,
            }),
        }
    }
}

/// In-memory asset source for headless hosts and tests.
///
/// ## Example
///
/// ```
/// use picture_quiz::preload::{AssetSource, MemorySource};
///
/// let source = MemorySource::new().with_asset("images/a/1.png", b"png bytes");
/// assert!(source.resolve("images/a/1.png").is_ok());
/// assert!(source.resolve("images/a/2.png").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    entries: FxHashMap<String, Arc<[u8]>>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl AsRef<[u8]>) {
        self.entries.insert(path.into(), Arc::from(bytes.as_ref()));
    }

    /// Add an asset, builder style.
    #[must_use]
    pub fn with_asset(mut self, path: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        self.insert(path, bytes);
        self
    }

    /// Number of stored assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the source is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetSource for MemorySource {
    fn resolve(&self, path: &str) -> Result<AssetHandle, AssetError> {
        self.entries
            .get(path)
            .map(|bytes| AssetHandle { bytes: bytes.clone() })
            .ok_or_else(|| AssetError::NotFound {
                path: path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_bytes() {
        let handle = AssetHandle::from(vec![1u8, 2, 3]);
        assert_eq!(handle.bytes(), &[1, 2, 3]);
        assert_eq!(handle.len(), 3);
        assert!(!handle.is_empty());
    }

    #[test]
    fn test_handle_clone_shares_bytes() {
        let handle = AssetHandle::from(b"shared".as_slice());
        let clone = handle.clone();
        assert_eq!(handle, clone);
    }

    #[test]
    fn test_memory_source_hit_and_miss() {
        let source = MemorySource::new().with_asset("a/1.png", b"x".as_slice());

        let hit = source.resolve("a/1.png").unwrap();
        assert_eq!(hit.bytes(), b"x");

        let miss = source.resolve("a/2.png");
        assert!(matches!(miss, Err(AssetError::NotFound { .. })));
    }

    #[test]
    fn test_fs_source_not_found() {
        let source = FsSource::new("/nonexistent-root");
        let miss = source.resolve("a/1.png");
        assert!(matches!(miss, Err(AssetError::NotFound { .. })));
    }
}
