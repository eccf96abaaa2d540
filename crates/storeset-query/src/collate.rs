//! Diacritic- and case-insensitive outlet-name comparison.
//!
//! The feed carries Vietnamese outlet names; ordering must treat `Đà Nẵng`
//! and `da nang` as equal at the primary strength. Names are folded by NFD
//! decomposition, dropping combining marks, mapping đ/Đ (which does not
//! decompose to a base letter) to `d`, and lowercasing. Exact fold ties fall
//! back to a bytewise compare of the raw names so the order is total.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collation key for an outlet name: diacritics and case removed.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|&c| !is_combining_mark(c))
        .map(|c| match c {
            'đ' | 'Đ' => 'd',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Total order over outlet names: folded keys first, raw bytes on ties.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a).cmp(&fold_name(b)).then_with(|| a.cmp(b))
}
