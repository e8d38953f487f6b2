//! Catalog: the ordered registry of categories.
//!
//! Registration order is significant — it fixes the sweep-phase presentation
//! order. `all_asset_refs` flattens the catalog deterministically: categories
//! in registration order, files in per-category list order.

use serde::{Deserialize, Serialize};

use super::category::{AssetRef, Category, CategoryId};

/// Ordered registry of answer categories.
///
/// ## Example
///
/// ```
/// use picture_quiz::catalog::Catalog;
///
/// let mut catalog = Catalog::new();
/// let a = catalog.register_auto("a", "Label A", "images/a");
/// catalog.set_files(a, ["a1.png", "a2.png"]);
///
/// let refs = catalog.all_asset_refs();
/// assert_eq!(refs[0].path, "images/a/a1.png");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    next_id: u16,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category.
    ///
    /// Panics if the id, key, or label collides with an existing category —
    /// the label decides answer matching, so collisions are configuration
    /// bugs, not runtime conditions.
    pub fn register(&mut self, category: Category) {
        if self.categories.iter().any(|c| c.id == category.id) {
            panic!("Category with ID {:?} already registered", category.id);
        }
        if self.categories.iter().any(|c| c.key == category.key) {
            panic!("Category with key {:?} already registered", category.key);
        }
        if self.categories.iter().any(|c| c.label == category.label) {
            panic!("Category with label {:?} already registered", category.label);
        }
        self.next_id = self.next_id.max(category.id.raw().saturating_add(1));
        self.categories.push(category);
    }

    /// Register a category with an auto-assigned ID and no files yet.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        dir: impl Into<String>,
    ) -> CategoryId {
        let id = CategoryId::new(self.next_id);
        self.register(Category::new(id, key, label, dir));
        id
    }

    /// Replace a category's file list (used by the numbered-file probe).
    ///
    /// No-op if the id is unknown.
    pub fn set_files<I, S>(&mut self, id: CategoryId, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(cat) = self.categories.iter_mut().find(|c| c.id == id) {
            cat.files = files.into_iter().map(Into::into).collect();
        }
    }

    /// Get a category by ID.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Get a category by its string key.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Find the category whose answer label matches exactly.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.label == label)
    }

    /// Number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over categories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Category IDs whose file list is still empty (probe candidates).
    pub fn unpopulated(&self) -> Vec<CategoryId> {
        self.categories
            .iter()
            .filter(|c| c.is_empty())
            .map(|c| c.id)
            .collect()
    }

    /// Flatten the catalog into every asset reference, in presentation order:
    /// categories in registration order, then per-category file order.
    #[must_use]
    pub fn all_asset_refs(&self) -> Vec<AssetRef> {
        let mut refs = Vec::new();
        for cat in &self.categories {
            for file in &cat.files {
                refs.push(AssetRef {
                    category: cat.id,
                    file: file.clone(),
                    path: cat.asset_path(file),
                });
            }
        }
        refs
    }
}
