//! Error taxonomy.
//!
//! Three tiers, matching how failures are recovered:
//!
//! - [`AssetError`]: a single asset failed to resolve. Recovered locally —
//!   the asset is skipped and play continues.
//! - [`PartialPreload`]: some assets never loaded. Surfaced as a warning;
//!   gameplay proceeds with whatever did load.
//! - [`RoundError`]: nothing was presentable for a scheduled step. The round
//!   aborts to idle and the start control is re-offered.
//!
//! No error escapes to a global handler; every user-visible failure is paired
//! with a recovery action.

use thiserror::Error;

use crate::preload::PreloadCache;

/// A single asset could not be resolved from its source.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The source has no resource at this path.
    #[error("asset not found: {path}")]
    NotFound { path: String },

    /// The resource exists but could not be read.
    #[error("failed to read asset {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// The resolved path the failure refers to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            AssetError::NotFound { path } | AssetError::Io { path, .. } => path,
        }
    }
}

/// Preload settled, but some assets failed to load.
///
/// Carries the cache of everything that *did* load: partial preload is a
/// warning, not a stop. The session keeps the cache and permits gameplay.
#[derive(Debug, Error)]
#[error("{} of {} assets failed to preload", .failures.len(), .total)]
pub struct PartialPreload {
    /// Every asset that loaded successfully.
    pub cache: PreloadCache,
    /// Total number of assets the catalog named.
    pub total: usize,
    /// Resolved path and cause for each asset that failed.
    pub failures: Vec<(String, AssetError)>,
}

impl PartialPreload {
    /// Number of assets that failed to load.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// A round could not continue.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No scheduled step had a presentable asset; every cache lookup failed.
    #[error("no presentable asset in the cache")]
    NoPresentableAssets,
}
