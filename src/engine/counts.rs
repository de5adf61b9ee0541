// src/engine/counts.rs
use scraper::ElementRef;
use tracing::{debug, error, warn};

use crate::core::html::{body_rows, cells};

use super::cells::{resolve, trailing, CellPick};
use super::quantity::{parse_item, CountSource};
use super::types::{GroupCounts, Item};

/// Sum item counts over every data row of `table`.
pub fn count_table(table: ElementRef<'_>) -> GroupCounts {
    let picks = body_rows(table).into_iter().filter_map(|row| {
        let tds = cells(row);
        let pick = resolve(trailing(&tds));
        if pick.is_none() {
            debug!("Skipping row without <td> cells");
        }
        pick
    });
    count_picks(picks)
}

/// Aggregate already-resolved cell picks. Pure apart from logging.
pub fn count_picks<I>(picks: I) -> GroupCounts
where
    I: IntoIterator<Item = CellPick>,
{
    let mut counts = GroupCounts::new();
    for pick in picks {
        if pick.is_fallback() {
            warn!("Every candidate cell spans rows; assuming the last one: {:?}", pick.text());
        }
        let text = pick.into_text();
        let (Item { name, count }, source) = parse_item(&text);

        if let CountSource::Malformed(raw) = &source {
            error!("Unreadable quantity {:?} in {:?}; counting it as 1", raw, text);
        }
        if name.is_empty() {
            debug!("Skipping cell with no item name: {:?}", text);
            continue;
        }
        let total = counts.entry(name).or_insert(0);
        match total.checked_add(count) {
            Some(sum) => *total = sum,
            None => {
                error!("Count overflow summing {:?}; holding at {}", text, u32::MAX);
                *total = u32::MAX;
            }
        }
    }
    counts
}
