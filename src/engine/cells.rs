// src/engine/cells.rs
//! Picking the cell that owns a row's "name × count" text.
//!
//! The material tables merge cells vertically. A cell carrying `rowspan`
//! starts a block that continues into the rows below, and the rows below
//! omit that cell entirely. The item text for a row therefore sits in the
//! first of its trailing cells that is *not* such a spanning cell.

use scraper::ElementRef;

use crate::core::html::cell_text;

/// Number of trailing cells considered per row.
pub const CANDIDATES: usize = 3;

/// The minimal view of a table cell the resolver needs.
pub trait CellNode {
    /// True when the cell spans down into following rows.
    fn is_continuation(&self) -> bool;
    fn content(&self) -> String;
}

impl CellNode for ElementRef<'_> {
    fn is_continuation(&self) -> bool {
        self.value().attr("rowspan").is_some()
    }

    fn content(&self) -> String {
        cell_text(*self)
    }
}

/// Which cell was picked, and whether the pick was validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellPick {
    /// First candidate without the merge marker.
    Owned(String),
    /// Every candidate carried the marker; rightmost taken as a guard.
    Fallback(String),
}

impl CellPick {
    pub fn text(&self) -> &str {
        match self {
            CellPick::Owned(t) | CellPick::Fallback(t) => t,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            CellPick::Owned(t) | CellPick::Fallback(t) => t,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CellPick::Fallback(_))
    }
}

/// Resolve the owning cell among `cands`, scanned left to right.
/// Returns `None` only for an empty slice.
pub fn resolve<C: CellNode>(cands: &[C]) -> Option<CellPick> {
    if let Some(owner) = cands.iter().find(|c| !c.is_continuation()) {
        return Some(CellPick::Owned(owner.content()));
    }
    cands.last().map(|c| CellPick::Fallback(c.content()))
}

/// The last `CANDIDATES` items of a row's cells.
pub fn trailing<T>(cells: &[T]) -> &[T] {
    &cells[cells.len().saturating_sub(CANDIDATES)..]
}
