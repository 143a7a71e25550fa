//! The canonical product collection held by the dashboard.

use crate::model::{Product, ProductId};
use std::collections::HashSet;

/// Products as last fetched, plus the local optimistic edits applied since.
///
/// Nothing here fails: an unknown id is a no-op, which keeps repeated toggles and
/// deletes idempotent from the caller's point of view.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    products: Vec<Product>,
    revision: u64,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection.
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = products;
        self.revision += 1;
    }

    /// Flip the favorite flag locally. Returns whether a product matched.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.is_favorite = !product.is_favorite;
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Drop a product locally. Returns whether a product matched.
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id == id) {
            Some(index) => {
                self.products.remove(index);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Bumped by every change that actually altered the collection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Distinct categories of the whole collection, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}
