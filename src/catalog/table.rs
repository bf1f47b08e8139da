use std::collections::HashMap;

use crate::error::{OrderError, Result};
use crate::models::{Category, Item};

/// Read-only item table.
///
/// Item order is significant: the optimization model assigns decision
/// variables in this order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    /// Lowercase name -> position in `items`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting anything that would yield a degenerate model.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(OrderError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if !item.is_valid() {
                return Err(OrderError::InvalidCatalog(format!(
                    "item '{}' has a negative or non-finite attribute",
                    item.name
                )));
            }
            if index.insert(item.key(), position).is_some() {
                return Err(OrderError::InvalidCatalog(format!(
                    "duplicate item name '{}'",
                    item.name
                )));
            }
        }

        for category in Category::MANDATORY {
            if !items.iter().any(|i| i.category == category) {
                return Err(OrderError::InvalidCatalog(format!(
                    "no items in mandatory category '{}'",
                    category
                )));
            }
        }

        Ok(Self { items, index })
    }

    /// Get an item by name (case-insensitive).
    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.position(name).map(|i| &self.items[i])
    }

    /// Variable index of an item (case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_lowercase()).copied()
    }

    /// Look up every name, failing on the first unknown one.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Item>> {
        names
            .iter()
            .map(|n| {
                self.get_item(n.as_ref())
                    .ok_or_else(|| OrderError::ItemNotFound(n.as_ref().to_string()))
            })
            .collect()
    }

    /// Items of one category, in catalog order.
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.category == category)
    }

    /// Variable indices of one category.
    pub fn positions_in(&self, category: Category) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, i)| i.category == category)
            .map(|(p, _)| p)
            .collect()
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Count of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
