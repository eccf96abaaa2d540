//! Outlet coverage selection: an approximate minimum set cover over the
//! outlets carrying the requested products.
//!
//! Outlets are first ranked by how many requested products they carry
//! (descending buckets), then each bucket is drained greedily by how many
//! not-yet-covered products an outlet introduces. Both tie-breaks reduce to
//! a total order, so identical inputs always produce identical output.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use storeset_core::Product;

use crate::collate::fold_name;

/// One selected outlet: its carried requested products (in request order)
/// and how many of them it was the first to cover.
#[derive(Debug, Clone, Serialize)]
pub struct Outlet {
    pub name: String,
    pub products: Vec<String>,
    pub introduces: usize,
}

struct Candidate {
    name: String,
    folded: String,
    products: Vec<String>,
}

impl Candidate {
    fn new_coverage(&self, covered: &HashSet<String>) -> usize {
        self.products
            .iter()
            .filter(|id| !covered.contains(*id))
            .count()
    }
}

/// Computes the ordered outlet covering for the available requested products.
///
/// Every id in `available` carried by at least one outlet appears under each
/// selected outlet that carries it; product lists follow `requested_order`,
/// not catalog order. Empty input yields an empty result.
#[must_use]
pub fn select_outlets(available: &[Product], requested_order: &[String]) -> Vec<Outlet> {
    if available.is_empty() {
        return Vec::new();
    }

    let available_ids: HashSet<&str> = available.iter().map(|p| p.id.as_str()).collect();
    let request_order: Vec<&String> = requested_order
        .iter()
        .filter(|id| available_ids.contains(id.as_str()))
        .collect();

    // Outlet name -> set of requested available ids it carries.
    let mut carried: HashMap<&str, HashSet<&str>> = HashMap::new();
    for product in available {
        for store in &product.stores {
            let name = store.trim();
            if name.is_empty() {
                continue;
            }
            carried.entry(name).or_default().insert(product.id.as_str());
        }
    }

    let mut candidates: Vec<Candidate> = carried
        .into_iter()
        .map(|(name, ids)| Candidate {
            name: name.to_string(),
            folded: fold_name(name),
            products: request_order
                .iter()
                .filter(|id| ids.contains(id.as_str()))
                .map(|id| (*id).clone())
                .collect(),
        })
        .filter(|candidate| !candidate.products.is_empty())
        .collect();

    // Primary order: carried-count descending, then collation, then raw name.
    candidates.sort_by(|a, b| {
        b.products
            .len()
            .cmp(&a.products.len())
            .then_with(|| a.folded.cmp(&b.folded))
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut ordered = Vec::with_capacity(candidates.len());
    let mut covered: HashSet<String> = HashSet::new();

    let mut rest = candidates.as_slice();
    while let Some(first) = rest.first() {
        let size = first.products.len();
        let split = rest.partition_point(|c| c.products.len() == size);
        let (bucket, tail) = rest.split_at(split);
        rest = tail;

        // Within a size bucket, repeatedly take the outlet that introduces
        // the most uncovered products, collation order on ties.
        let mut remaining: Vec<&Candidate> = bucket.iter().collect();
        while !remaining.is_empty() {
            let mut best = 0;
            let mut best_new = remaining[0].new_coverage(&covered);
            for (idx, candidate) in remaining.iter().enumerate().skip(1) {
                let new = candidate.new_coverage(&covered);
                if new > best_new {
                    best = idx;
                    best_new = new;
                }
            }
            let chosen = remaining.remove(best);
            covered.extend(chosen.products.iter().cloned());
            ordered.push(Outlet {
                name: chosen.name.clone(),
                products: chosen.products.clone(),
                introduces: best_new,
            });
        }
    }

    ordered
}
