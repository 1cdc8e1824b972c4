//! In-memory requirement index.
//!
//! The store maps both prefab names and shared display names to validated
//! items. It is rebuilt wholesale on every reload: a new index is built off
//! to the side and published with a single atomic swap, so readers always
//! see either the previous index or the new one, never a mix.

use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;

use super::validated::ValidatedItem;

/// One immutable generation of the store.
#[derive(Debug, Default)]
pub struct StoreIndex {
    by_prefab: HashMap<String, Arc<ValidatedItem>>,
    by_name: HashMap<String, Arc<ValidatedItem>>,
}

impl StoreIndex {
    fn build(items: Vec<ValidatedItem>) -> Self {
        let mut index = StoreIndex::default();
        for item in items {
            let item = Arc::new(item);
            index
                .by_name
                .insert(item.name().to_string(), Arc::clone(&item));
            index.by_prefab.insert(item.prefab().to_string(), item);
        }
        index
    }

    /// Look up by prefab name.
    pub fn get_by_prefab(&self, prefab: &str) -> Option<&Arc<ValidatedItem>> {
        self.by_prefab.get(prefab)
    }

    /// Look up by shared display name.
    pub fn get_by_name(&self, name: &str) -> Option<&Arc<ValidatedItem>> {
        self.by_name.get(name)
    }

    /// Look up by either key.
    pub fn get(&self, key: &str, by_name: bool) -> Option<&Arc<ValidatedItem>> {
        if by_name {
            self.get_by_name(key)
        } else {
            self.get_by_prefab(key)
        }
    }

    /// Prefab names of every controlled item, sorted.
    pub fn item_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.by_prefab.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Every controlled item, sorted by prefab.
    pub fn items(&self) -> Vec<Arc<ValidatedItem>> {
        let mut items: Vec<_> = self.by_prefab.values().cloned().collect();
        items.sort_by(|a, b| a.prefab().cmp(b.prefab()));
        items
    }

    /// Number of controlled items.
    pub fn len(&self) -> usize {
        self.by_prefab.len()
    }

    /// Whether no item is controlled.
    pub fn is_empty(&self) -> bool {
        self.by_prefab.is_empty()
    }
}

/// Shared handle to the current requirement index.
///
/// Clones share the same underlying index.
#[derive(Debug, Clone, Default)]
pub struct RequirementStore {
    current: Arc<ArcSwap<StoreIndex>>,
}

impl RequirementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole index with `items`.
    ///
    /// Later items win when two share a prefab or a display name.
    pub fn replace_all(&self, items: Vec<ValidatedItem>) {
        let index = StoreIndex::build(items);
        tracing::debug!("Publishing requirement index with {} items", index.len());
        self.current.store(Arc::new(index));
    }

    /// Consistent view of the current generation.
    pub fn snapshot(&self) -> Arc<StoreIndex> {
        self.current.load_full()
    }

    /// Look up by prefab name.
    pub fn get_by_prefab(&self, prefab: &str) -> Option<Arc<ValidatedItem>> {
        self.current.load().get_by_prefab(prefab).cloned()
    }

    /// Look up by shared display name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<ValidatedItem>> {
        self.current.load().get_by_name(name).cloned()
    }

    /// Look up by either key.
    pub fn get(&self, key: &str, by_name: bool) -> Option<Arc<ValidatedItem>> {
        self.current.load().get(key, by_name).cloned()
    }

    /// Prefab names of every controlled item, sorted.
    pub fn item_keys(&self) -> Vec<String> {
        self.current.load().item_keys()
    }

    /// Number of controlled items.
    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    /// Whether no item is controlled.
    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }
}
