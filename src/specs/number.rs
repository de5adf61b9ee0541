// src/specs/number.rs
//! Character catalogue number from the strategy wiki.
//!
//! The number sits in the first cell of the table inside the second
//! `div.ie5` block, as e.g. `祖1` or `祖-72`. It is normalized to
//! `祖-001`, with an `R` suffix for reincarnated (`（…）`) names.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::NUMBER_DIV_INDEX;
use crate::core::html::{body_rows, cell_text, cells, children_named};
use crate::error::ExtractError;

static INFO_DIV: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.ie5").expect("valid info div selector"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)-?(\d+)$").expect("valid number regex"));

pub fn extract(doc: &Html, name: &str) -> Result<String, ExtractError> {
    let div = doc.select(&INFO_DIV).nth(NUMBER_DIV_INDEX).ok_or(ExtractError::NoNumber)?;
    let table = children_named(div, "table").next().ok_or(ExtractError::NoNumber)?;
    let cell = body_rows(table)
        .into_iter()
        .find_map(|row| cells(row).into_iter().next())
        .ok_or(ExtractError::NoNumber)?;
    normalize(&cell_text(cell), name)
}

/// `祖1` → `祖-001`; adds `R` when `name` contains a full-width parenthesis.
pub fn normalize(text: &str, name: &str) -> Result<String, ExtractError> {
    let bad = || ExtractError::BadNumber { text: s!(text) };
    let caps = NUMBER_RE.captures(text.trim()).ok_or_else(bad)?;
    let id: u32 = caps[2].parse().map_err(|_| bad())?;

    let mut number = format!("{}-{:03}", &caps[1], id);
    if name.contains('（') {
        number.push('R');
    }
    Ok(number)
}
