//! The preload pipeline: fetch every catalog asset before gameplay.
//!
//! One resolve per asset reference, all concurrent, joined before returning
//! (fire-and-join). A failed asset never aborts the rest: the result is the
//! cache of everything that loaded, with failures reported via
//! [`PartialPreload`]. The session gates the start control on this call
//! settling.

use crossbeam_channel::unbounded;
use log::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{AssetError, PartialPreload};

use super::cache::PreloadCache;
use super::source::{AssetHandle, AssetSource};

/// Preload every asset named by the catalog.
///
/// `progress(loaded, total)` fires on each successful load, in completion
/// order. Returns the full cache, or [`PartialPreload`] carrying the partial
/// cache and the per-asset failures when some assets did not load.
///
/// Blocks until every fetch settles.
pub fn preload<S, F>(
    catalog: &Catalog,
    source: &S,
    mut progress: F,
) -> Result<PreloadCache, PartialPreload>
where
    S: AssetSource + ?Sized,
    F: FnMut(usize, usize),
{
    let refs = catalog.all_asset_refs();
    let total = refs.len();
    debug!("preloading {total} assets");

    let (tx, rx) = unbounded::<(String, Result<AssetHandle, AssetError>)>();

    std::thread::scope(|scope| {
        // One worker per asset. Catalogs are small; the point is that loads
        // are unordered and a slow one does not delay starting the others.
        for asset in &refs {
            let tx = tx.clone();
            scope.spawn(move || {
                let outcome = source.resolve(&asset.path);
                let _ = tx.send((asset.path.clone(), outcome));
            });
        }
        drop(tx);

        let mut cache = PreloadCache::new();
        let mut failures: Vec<(String, AssetError)> = Vec::new();
        let mut loaded = 0usize;

        for (path, outcome) in rx {
            match outcome {
                Ok(handle) => {
                    cache.insert(path, handle);
                    loaded += 1;
                    progress(loaded, total);
                }
                Err(err) => {
                    warn!("preload failed for {path}: {err}");
                    failures.push((path, err));
                }
            }
        }

        if failures.is_empty() {
            Ok(cache)
        } else {
            Err(PartialPreload {
                cache,
                total,
                failures,
            })
        }
    })
}
