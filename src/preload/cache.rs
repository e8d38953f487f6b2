//! The preload cache: resolved path → loaded asset.
//!
//! Populated once per catalog load, read-only during gameplay, never
//! evicted. A missing entry means the asset failed to preload; the round
//! controller skips it.

use rustc_hash::FxHashMap;

use super::source::AssetHandle;

/// Read-mostly map from resolved asset path to loaded handle.
#[derive(Clone, Debug, Default)]
pub struct PreloadCache {
    entries: FxHashMap<String, AssetHandle>,
}

impl PreloadCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a loaded asset. Called by the preload manager only; the cache
    /// is not mutated once gameplay starts.
    pub fn insert(&mut self, path: impl Into<String>, handle: AssetHandle) {
        self.entries.insert(path.into(), handle);
    }

    /// Look up a loaded asset.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&AssetHandle> {
        self.entries.get(path)
    }

    /// Check whether an asset loaded.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of loaded assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (path, handle) entries. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetHandle)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
