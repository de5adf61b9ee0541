// src/specs/gifts.rs
//! Per-tier gift materials from a character's page on the material wiki.
//!
//! Page shape:
//! ```text
//! <h2>… ★★☆ … 2.5</h2>
//! <div><table><tbody><tr>…<td>素材名×3</td>…</tr>…</tbody></table></div>
//! ```
//! Output: one row per tier, highest tier first, prefixed by
//! `number, name, ★ label`.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::consts::{GROUP_TAG, STAR};
use crate::engine::{self, count_table, star_label, CountedGroup, FormattedRow, Formatter};
use crate::error::ExtractError;

static GROUP_HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(GROUP_TAG).expect("valid group header selector"));

/// Every tier group on the page, counted, highest key first.
pub fn extract(doc: &Html) -> Result<Vec<CountedGroup>, ExtractError> {
    let mut out = Vec::new();
    for group in engine::groups(doc, &GROUP_HEADER, STAR) {
        let group = group?;
        let counts = count_table(group.table);
        debug!("Level {} ({:?}): {} materials", group.key, group.header, counts.len());
        out.push(CountedGroup { key: group.key, header: group.header, counts });
    }
    if out.is_empty() {
        warn!("No {STAR} tier headers found");
    }
    Ok(engine::order_desc(out))
}

/// Format already-ordered groups as rows.
pub fn format(formatter: &Formatter, number: &str, name: &str, groups: &[CountedGroup]) -> Vec<FormattedRow> {
    groups
        .iter()
        .map(|g| {
            let label = star_label(g.key);
            let context = format!("{name} {label}");
            formatter.format(&context, vec![s!(number), s!(name), label], &g.counts)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OrderSpec;

    const PAGE: &str = r#"
        <h2>1 概要</h2>
        <h2>2 ☆ ★☆ (Lv.1.5)</h2>
        <div><table><tbody>
            <tr><td>-</td><td>鉄×1</td><td>-</td></tr>
        </tbody></table></div>
        <h2>3 ☆ ★★★ (Lv.3.0)</h2>
        <div><table><tbody>
            <tr><td>-</td><td>鉄×4</td><td>-</td></tr>
        </tbody></table></div>
        <h2>4 ☆ ★★ (Lv.2.0)</h2>
        <div><table><tbody>
            <tr><td>-</td><td>布×2</td><td>-</td></tr>
        </tbody></table></div>
    "#;

    #[test]
    fn tiers_come_out_highest_first() {
        let doc = Html::parse_document(PAGE);
        let groups = extract(&doc).unwrap();
        let keys: Vec<f64> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![3.0, 2.0, 1.5]);
    }

    #[test]
    fn rows_carry_prefix_and_columns() {
        let doc = Html::parse_document(PAGE);
        let groups = extract(&doc).unwrap();
        let f = Formatter::new(OrderSpec::new(["鉄", "布"]));
        let lines: Vec<String> = format(&f, "祖-001", "アスモデウス", &groups)
            .iter()
            .map(|r| f.line(r))
            .collect();
        assert_eq!(
            lines,
            vec![
                "祖-001\tアスモデウス\t★★★\t4\t0",
                "祖-001\tアスモデウス\t★★\t0\t2",
                "祖-001\tアスモデウス\t★☆\t1\t0",
            ]
        );
    }

    #[test]
    fn page_without_tiers_is_empty() {
        let doc = Html::parse_document("<h2>目次</h2>");
        assert!(extract(&doc).unwrap().is_empty());
    }
}
