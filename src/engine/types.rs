// src/engine/types.rs
use std::collections::HashMap;

use scraper::ElementRef;

/// Aggregated counts for one group, keyed by item name.
pub type GroupCounts = HashMap<String, u32>;

/// One name/count pair read from a table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub count: u32,
}

/// One tier of data on a page: its numeric key and the table holding its rows.
#[derive(Clone, Debug)]
pub struct Group<'a> {
    pub key: f64,
    pub header: String,
    pub table: ElementRef<'a>,
}

/// A group after aggregation. Still carries the header text for log context.
#[derive(Clone, Debug, PartialEq)]
pub struct CountedGroup {
    pub key: f64,
    pub header: String,
    pub counts: GroupCounts,
}

/// Canonical column order. Blank entries are placeholder columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderSpec {
    names: Vec<String>,
}

impl OrderSpec {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// One name per line, trimmed. Blank lines stay as placeholders.
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines().map(str::trim))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.names.iter().any(|n| n == name)
    }
}

/// Output of the canonical formatter for one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedRow {
    pub prefix: Vec<String>,
    pub columns: Vec<u32>,
    /// Items present in the counts but absent from the order.
    pub unhandled: Vec<(String, u32)>,
}

impl FormattedRow {
    pub fn fields(&self) -> Vec<String> {
        let mut out = self.prefix.clone();
        out.extend(self.columns.iter().map(u32::to_string));
        out
    }
}
