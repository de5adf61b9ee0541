// src/engine/mod.rs
//! Page-independent extraction core.
//!
//! ```text
//! Html → groups → count_table (cells::resolve → quantity::parse_item)
//!      → Formatter::format (OrderSpec order, unhandled items warned)
//! ```
//!
//! Nothing here does I/O. Pages are fetched and cached elsewhere; this
//! module only walks an already-parsed tree.

pub mod cells;
pub mod counts;
pub mod format;
pub mod groups;
pub mod quantity;
pub mod types;

pub use cells::{CellNode, CellPick};
pub use counts::count_table;
pub use format::{star_label, Formatter};
pub use groups::{groups, level_of, table_after};
pub use quantity::parse_item;
pub use types::*;

/// Sort groups highest key first. On duplicate keys the later group wins.
pub fn order_desc(groups: Vec<CountedGroup>) -> Vec<CountedGroup> {
    let mut out: Vec<CountedGroup> = Vec::with_capacity(groups.len());
    for g in groups {
        if let Some(prev) = out.iter_mut().find(|p| p.key == g.key) {
            tracing::warn!("Duplicate level {} (\"{}\" replaces \"{}\")", g.key, g.header, prev.header);
            *prev = g;
        } else {
            out.push(g);
        }
    }
    out.sort_by(|a, b| b.key.total_cmp(&a.key));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(key: f64, header: &str) -> CountedGroup {
        CountedGroup { key, header: s!(header), counts: GroupCounts::new() }
    }

    #[test]
    fn keys_come_out_descending() {
        let keys: Vec<f64> = order_desc(vec![group(1.5, "a"), group(3.0, "b"), group(2.0, "c")])
            .into_iter()
            .map(|g| g.key)
            .collect();
        assert_eq!(keys, vec![3.0, 2.0, 1.5]);
    }

    #[test]
    fn duplicate_key_keeps_the_later_group() {
        let out = order_desc(vec![group(2.0, "first"), group(1.0, "x"), group(2.0, "second")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].header, "second");
    }
}
