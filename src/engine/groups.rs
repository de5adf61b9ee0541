// src/engine/groups.rs
//! Finding the per-tier groups on a material page.
//!
//! A group starts at a header whose text contains the marker glyph. Its key
//! is the last number in the header text (headers may carry a section
//! number first, e.g. `3 ★★☆ (Lv.2.5)`), and its data is the first table
//! under the `<div>` siblings that follow the header.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::MAX_LEVEL;
use crate::core::html::{cell_text, following_tables, headers_containing};
use crate::error::ExtractError;

use super::types::Group;

static LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid level regex"));

/// Last integer or decimal number in `text`.
pub fn level_of(text: &str) -> Option<f64> {
    LEVEL_RE
        .find_iter(text)
        .last()
        .and_then(|m| m.as_str().parse().ok())
}

/// Lazily resolves each marker header into a [`Group`], in document order.
pub struct Groups<'a> {
    headers: std::vec::IntoIter<ElementRef<'a>>,
}

impl<'a> Iterator for Groups<'a> {
    type Item = Result<Group<'a>, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.headers.next()?;
        Some(resolve_group(header))
    }
}

/// Every `tag` header on `doc` whose text contains `marker`.
pub fn groups<'a>(doc: &'a Html, tag: &Selector, marker: &str) -> Groups<'a> {
    Groups { headers: headers_containing(doc, tag, marker).into_iter() }
}

fn resolve_group(header: ElementRef<'_>) -> Result<Group<'_>, ExtractError> {
    let text = cell_text(header);
    let key = level_of(&text).ok_or_else(|| ExtractError::NoLevel { header: text.clone() })?;
    if key > MAX_LEVEL {
        return Err(ExtractError::LevelOutOfRange { header: text, level: key });
    }
    let table = following_tables(header)
        .next()
        .ok_or_else(|| ExtractError::NoTable { header: text.clone() })?;
    Ok(Group { key, header: text, table })
}

/// The `nth` table (0-based) after the first `tag` header containing `needle`.
pub fn table_after<'a>(
    doc: &'a Html,
    tag: &'static str,
    needle: &str,
    nth: usize,
) -> Result<(String, ElementRef<'a>), ExtractError> {
    let not_found = || ExtractError::HeaderNotFound { tag, needle: s!(needle) };
    let sel = Selector::parse(tag).map_err(|_| not_found())?;
    let header = headers_containing(doc, &sel, needle)
        .into_iter()
        .next()
        .ok_or_else(not_found)?;
    let text = cell_text(header);
    let table = following_tables(header)
        .nth(nth)
        .ok_or_else(|| ExtractError::NoTable { header: text.clone() })?;
    Ok((text, table))
}
