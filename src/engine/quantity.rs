// src/engine/quantity.rs
use super::types::Item;

/// Multiplication sign between an item name and its count.
pub const SEPARATOR: char = '×';

/// Where an item's count came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountSource {
    /// `name×3`
    Explicit,
    /// `name` with no separator; count is 1.
    Implicit,
    /// Separator present but the count text is not an integer; count is 1.
    Malformed(String),
}

/// Split `name` or `name×count` into an [`Item`].
///
/// Text after a second separator is ignored. The name is trimmed so that
/// incidental whitespace never produces a distinct key.
pub fn parse_item(text: &str) -> (Item, CountSource) {
    let mut parts = text.split(SEPARATOR);
    let name = s!(parts.next().unwrap_or("").trim());

    let (count, source) = match parts.next() {
        None => (1, CountSource::Implicit),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(n) => (n, CountSource::Explicit),
            Err(_) => (1, CountSource::Malformed(s!(raw.trim()))),
        },
    };

    (Item { name, count }, source)
}
