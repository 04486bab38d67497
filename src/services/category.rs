//! Category service
//!
//! Categories can only be created; there is no edit or delete.

use tracing::debug;

use crate::models::Category;
use crate::storage::Store;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a mut Store,
}

impl<'a> CategoryService<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Create a category. A blank or over-long name makes this a no-op that
    /// returns `None`.
    pub fn create(&mut self, name: &str, icon: &str) -> Option<Category> {
        let category = Category::new(name.trim(), icon.trim());
        if let Err(e) = category.validate() {
            debug!(reason = %e, "category not created");
            return None;
        }

        self.store
            .update(|state| state.categories.push(category.clone()));
        debug!(id = %category.id, name = %category.name, "category created");
        Some(category)
    }

    /// All categories, sorted by name
    pub fn list(&self) -> Vec<Category> {
        let mut categories = self.store.get().categories.clone();
        categories.sort_by_key(|c| c.name.to_lowercase());
        categories
    }

    /// Find a category by name or ID
    pub fn find(&self, identifier: &str) -> Option<Category> {
        self.store.get().find_category(identifier).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_create_and_find() {
        let backend = MemoryBackend::new();
        let mut store = Store::open(backend.clone()).unwrap();
        let mut service = CategoryService::new(&mut store);

        let created = service.create("  Groceries ", "🛒").unwrap();
        assert_eq!(created.name, "Groceries");
        assert_eq!(service.find("groceries"), Some(created.clone()));
        assert_eq!(backend.saved().categories, vec![created]);
    }

    #[test]
    fn test_blank_name_is_noop() {
        let backend = MemoryBackend::new();
        let mut store = Store::open(backend.clone()).unwrap();
        let mut service = CategoryService::new(&mut store);

        assert!(service.create("   ", "🛒").is_none());
        assert!(service.list().is_empty());
        assert_eq!(backend.writes(), 0);
    }

    #[test]
    fn test_list_sorted_by_name() {
        let mut store = Store::in_memory();
        let mut service = CategoryService::new(&mut store);
        service.create("rent", "");
        service.create("Coffee", "");
        service.create("bills", "");

        let names: Vec<_> = service.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["bills", "Coffee", "rent"]);
    }
}
