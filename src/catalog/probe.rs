//! Numbered-file discovery for categories without a static file list.
//!
//! Some categories are maintained by dropping files into a directory rather
//! than editing configuration. For those, the catalog is filled in by probing
//! `1.<ext>`, `2.<ext>`, ... against the asset source, stopping at the first
//! filename that fails to resolve. This runs once, before the catalog is
//! considered ready — it is configuration discovery, not gameplay.

use log::{debug, warn};

use crate::preload::AssetSource;

use super::category::CategoryId;
use super::registry::Catalog;

/// Upper bound on probe attempts per category.
pub const DEFAULT_PROBE_CAP: usize = 10;

/// Probe numbered filenames for one category and install the result.
///
/// Attempts `{dir}/1.{ext}` upward, stops at the first miss or at `cap`, and
/// replaces the category's file list with the resolved prefix. Returns the
/// number of files discovered. Unknown ids discover nothing.
pub fn probe_numbered<S>(
    catalog: &mut Catalog,
    id: CategoryId,
    source: &S,
    ext: &str,
    cap: usize,
) -> usize
where
    S: AssetSource + ?Sized,
{
    let Some(category) = catalog.get(id) else {
        warn!("probe requested for unknown category {id}");
        return 0;
    };

    let key = category.key.clone();
    let mut files = Vec::new();
    for n in 1..=cap {
        let file = format!("{n}.{ext}");
        if source.resolve(&category.asset_path(&file)).is_err() {
            break;
        }
        files.push(file);
    }

    debug!("probed {} files for category '{}'", files.len(), key);
    let count = files.len();
    catalog.set_files(id, files);
    count
}
