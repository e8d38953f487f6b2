//! Category and asset reference types.
//!
//! A category is a directory of related pictures plus the answer label the
//! player has to pick. The catalog assigns each category an opaque id; option
//! controls in the presentation layer are keyed by that id.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Category identifier assigned by the catalog in registration order.
///
/// Opaque to the engine — meaning comes from the [`Category`] it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u16);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// One answer category: a stable key, the answer label, and its asset files.
///
/// ## Example
///
/// ```
/// use picture_quiz::catalog::{Category, CategoryId};
///
/// let cat = Category::new(CategoryId::new(0), "compose", "Composition", "images/compose")
///     .with_files(["1.png", "2.png"]);
///
/// assert_eq!(cat.asset_path("1.png"), "images/compose/1.png");
/// assert_eq!(cat.files.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for this category.
    pub id: CategoryId,

    /// Stable string key (e.g. `"compose"`). Unique within a catalog.
    pub key: String,

    /// Answer text shown on the option control and matched on a guess.
    /// Unique within a catalog.
    pub label: String,

    /// Path prefix the files live under (e.g. `"images/compose"`).
    pub dir: String,

    /// Ordered asset filenames. May start empty and be filled by the
    /// numbered-file probe before the catalog is considered ready.
    pub files: SmallVec<[String; 8]>,
}

impl Category {
    /// Create a category with no files yet.
    pub fn new(
        id: CategoryId,
        key: impl Into<String>,
        label: impl Into<String>,
        dir: impl Into<String>,
    ) -> Self {
        Self {
            id,
            key: key.into(),
            label: label.into(),
            dir: dir.into(),
            files: SmallVec::new(),
        }
    }

    /// Set the static file list.
    #[must_use]
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve a filename to the loadable path for this category.
    #[must_use]
    pub fn asset_path(&self, file: &str) -> String {
        format!("{}/{}", self.dir, file)
    }

    /// Number of assets in this category.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if the category has no assets (yet).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Reference to one asset: owning category plus filename and resolved path.
///
/// The resolved path is the preload cache key and the value handed to
/// `PresentationSink::show_image`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    /// Category the asset belongs to.
    pub category: CategoryId,

    /// Filename relative to the category directory.
    pub file: String,

    /// Resolved loadable path (`"{dir}/{file}"`).
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id() {
        let id = CategoryId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Category(5)");
    }

    #[test]
    fn test_asset_path() {
        let cat = Category::new(CategoryId::new(0), "size", "Sizing", "images/size");
        assert_eq!(cat.asset_path("3.png"), "images/size/3.png");
    }

    #[test]
    fn test_with_files() {
        let cat = Category::new(CategoryId::new(1), "multi", "Combined", "images/multi")
            .with_files(["1.png", "2.png"]);

        assert_eq!(cat.len(), 2);
        assert!(!cat.is_empty());
        assert_eq!(cat.files[0], "1.png");
    }

    #[test]
    fn test_starts_empty() {
        let cat = Category::new(CategoryId::new(2), "size", "Sizing", "images/size");
        assert!(cat.is_empty());
        assert_eq!(cat.len(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let cat = Category::new(CategoryId::new(0), "compose", "Composition", "images/compose")
            .with_files(["1.png"]);

        let json = serde_json::to_string(&cat).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(cat, back);
    }
}
