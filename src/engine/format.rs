// src/engine/format.rs
use tracing::warn;

use crate::config::consts::MAX_LEVEL;
use crate::tsv::join_row;

use super::types::{FormattedRow, GroupCounts, OrderSpec};

/// Column values for `order`, with 0 for names the group lacks.
/// Blank (placeholder) entries never match anything.
pub fn columns(order: &OrderSpec, counts: &GroupCounts) -> Vec<u32> {
    order
        .names()
        .iter()
        .map(|name| if name.is_empty() { 0 } else { counts.get(name).copied().unwrap_or(0) })
        .collect()
}

/// Items the order does not account for, sorted by name.
pub fn unhandled(order: &OrderSpec, counts: &GroupCounts) -> Vec<(String, u32)> {
    let mut rest: Vec<(String, u32)> = counts
        .iter()
        .filter(|(name, _)| !order.contains(name))
        .map(|(name, n)| (name.clone(), *n))
        .collect();
    rest.sort();
    rest
}

/// Star label for a tier key: one `★` per whole level, `☆` for a half step.
/// `1.5` → `★☆`, `3.0` → `★★★`. Keys are clamped to `0..=MAX_LEVEL`.
pub fn star_label(key: f64) -> String {
    let key = key.clamp(0.0, MAX_LEVEL);
    let whole = key.trunc() as usize;
    let mut label = "★".repeat(whole);
    if key.fract() >= 0.5 {
        label.push('☆');
    }
    label
}

/// Projects group counts onto the canonical column order.
pub struct Formatter {
    order: OrderSpec,
}

impl Formatter {
    pub fn new(order: OrderSpec) -> Self {
        Self { order }
    }

    /// Build one row. Unhandled items are logged as a warning tagged with
    /// `context`, and returned on the row.
    pub fn format(&self, context: &str, prefix: Vec<String>, counts: &GroupCounts) -> FormattedRow {
        let row = FormattedRow {
            prefix,
            columns: columns(&self.order, counts),
            unhandled: unhandled(&self.order, counts),
        };
        if !row.unhandled.is_empty() {
            let names: Vec<String> = row.unhandled.iter().map(|(n, c)| format!("{n}×{c}")).collect();
            warn!("{context}: not handled material: {}", names.join(", "));
        }
        row
    }

    pub fn line(&self, row: &FormattedRow) -> String {
        join_row(&row.fields())
    }
}
