use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A catalog entry: one product and the retail outlets known to carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Canonical lowercase identifier, the last hyphen-delimited segment of
    /// the URL slug (e.g. `"ab12"` from `"ao-thun-basic-ab12"`).
    pub id: String,
    /// Canonical source URL exactly as it appeared in the feed. When a
    /// product block repeats, the last occurrence wins.
    pub url: String,
    /// Display label derived from the URL slug, e.g. `"Ao Thun Basic"`.
    pub name: String,
    /// Outlet names carrying this product. Deduplicated (case-sensitive,
    /// post-trim), first-appearance order. Empty means out of stock.
    pub stores: Vec<String>,
}

impl Product {
    /// Returns `true` if no outlet currently carries this product.
    #[must_use]
    pub fn is_out_of_stock(&self) -> bool {
        self.stores.is_empty()
    }

    /// Display label used in warnings and CLI output, e.g. `"Ao Thun Basic (AB12)"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.id.to_uppercase())
    }
}

/// The full product catalog built by one parse of the feed.
///
/// Immutable after construction; iteration follows feed appearance order so
/// listings are stable across identical feeds.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_id: HashMap<String, Product>,
    ordered_ids: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a finalized product, merging with any earlier block for the
    /// same id: the newer `url`/`name` overwrite, store sets are unioned
    /// (newer block's stores first, earlier stores appended if not present).
    pub fn upsert(&mut self, mut product: Product) {
        if let Some(existing) = self.by_id.get(&product.id) {
            for store in &existing.stores {
                if !product.stores.contains(store) {
                    product.stores.push(store.clone());
                }
            }
        } else {
            self.ordered_ids.push(product.id.clone());
        }
        self.by_id.insert(product.id.clone(), product);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered_ids.is_empty()
    }

    /// Product ids in feed appearance order.
    #[must_use]
    pub fn ordered_ids(&self) -> &[String] {
        &self.ordered_ids
    }

    /// Products in feed appearance order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.ordered_ids.iter().filter_map(|id| self.by_id.get(id))
    }
}
