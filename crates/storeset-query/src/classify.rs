//! Partition of requested ids into available / out-of-stock / not-found.

use storeset_core::{Catalog, Product};

/// Classification buckets for one query, each preserving input order.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Known products with at least one carrying outlet.
    pub available: Vec<Product>,
    /// Known products with an empty outlet set.
    pub unavailable: Vec<Product>,
    /// Ids with no catalog entry.
    pub missing: Vec<String>,
}

/// Buckets each requested id. Pure: the catalog is read-only and each query
/// gets its own cloned product records.
#[must_use]
pub fn classify(ids: &[String], catalog: &Catalog) -> Classification {
    let mut classification = Classification::default();

    for id in ids {
        match catalog.get(id) {
            None => classification.missing.push(id.clone()),
            Some(product) if product.is_out_of_stock() => {
                classification.unavailable.push(product.clone());
            }
            Some(product) => classification.available.push(product.clone()),
        }
    }

    classification
}
