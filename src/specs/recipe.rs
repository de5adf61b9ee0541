// src/specs/recipe.rs
//! Crafting recipe of one item from the shared recipe page.
//!
//! Each item has an `<h4>` header followed by two tables: the item's own
//! stats, then the materials. Only the materials table is counted.

use scraper::Html;
use tracing::debug;

use crate::config::consts::{RECIPE_TABLE_INDEX, RECIPE_TAG};
use crate::engine::{count_table, table_after, FormattedRow, Formatter, GroupCounts};
use crate::error::ExtractError;

pub fn extract(doc: &Html, name: &str) -> Result<GroupCounts, ExtractError> {
    let (header, table) = table_after(doc, RECIPE_TAG, name, RECIPE_TABLE_INDEX)?;
    let counts = count_table(table);
    debug!("Recipe {:?}: {} materials", header, counts.len());
    Ok(counts)
}

pub fn format(formatter: &Formatter, name: &str, counts: &GroupCounts) -> FormattedRow {
    formatter.format(name, vec![s!(name)], counts)
}
