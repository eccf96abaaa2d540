//! End-to-end query evaluation: raw input string → classified, covered report.

use serde::Serialize;

use storeset_core::Catalog;

use crate::classify::classify;
use crate::coverage::{select_outlets, Outlet};
use crate::input::parse_query_input;

/// Everything a caller needs to present one query's outcome: per-token
/// errors, out-of-stock warnings, and the ordered outlet covering.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    /// Tokens that failed identifier resolution.
    pub invalid_tokens: Vec<String>,
    /// Resolved ids with no catalog entry.
    pub missing_ids: Vec<String>,
    /// Display labels of requested products that are out of stock.
    pub out_of_stock: Vec<String>,
    /// Ordered outlet covering of the available requested products.
    pub outlets: Vec<Outlet>,
    /// Distinct available requested products; an outlet carrying this many
    /// covers the whole request on its own.
    pub total_available: usize,
}

impl QueryReport {
    /// `true` if nothing in the query resolved to a usable id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_available == 0
            && self.missing_ids.is_empty()
            && self.out_of_stock.is_empty()
            && self.invalid_tokens.is_empty()
    }

    /// `true` if this outlet alone carries every available requested product.
    #[must_use]
    pub fn covers_all(&self, outlet: &Outlet) -> bool {
        self.total_available > 0 && outlet.products.len() == self.total_available
    }
}

/// Evaluates one query against an immutable catalog.
///
/// Per-token failures never abort the query: whatever subset is valid and
/// available still produces an outlet covering.
#[must_use]
pub fn run_query(raw: &str, catalog: &Catalog) -> QueryReport {
    let parsed = parse_query_input(raw, catalog);
    let classification = classify(&parsed.ids, catalog);
    let outlets = select_outlets(&classification.available, &parsed.ids);

    tracing::debug!(
        requested = parsed.ids.len(),
        available = classification.available.len(),
        outlets = outlets.len(),
        "query evaluated"
    );

    QueryReport {
        invalid_tokens: parsed.invalid_tokens,
        missing_ids: classification.missing,
        out_of_stock: classification
            .unavailable
            .iter()
            .map(storeset_core::Product::display_label)
            .collect(),
        total_available: classification.available.len(),
        outlets,
    }
}
