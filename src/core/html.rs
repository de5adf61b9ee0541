// src/core/html.rs
// Small navigation helpers over a parsed `scraper::Html` tree.
// They mirror the few XPath steps the wiki pages need:
//   //h2[contains(text(), ...)]      -> headers_containing
//   following-sibling::div/table     -> following_tables
//   tbody/tr, tr/td                  -> body_rows, cells

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Parse raw page bytes. Invalid UTF-8 is replaced, never rejected.
pub fn parse_page(bytes: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(bytes))
}

/// Whitespace-normalized text of an element and all its descendants.
pub fn cell_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Direct child elements with the given tag name.
pub fn children_named<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name().eq_ignore_ascii_case(tag))
}

/// All `tag` elements whose text contains `needle`, in document order.
pub fn headers_containing<'a>(doc: &'a Html, tag: &Selector, needle: &str) -> Vec<ElementRef<'a>> {
    doc.select(tag)
        .filter(|h| cell_text(*h).contains(needle))
        .collect()
}

/// Tables that are direct children of the `<div>` siblings after `header`.
pub fn following_tables<'a>(header: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    header
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sib| sib.value().name() == "div")
        .flat_map(|div| children_named(div, "table"))
}

/// Body rows of a table. The parser always wraps bare rows in `<tbody>`;
/// rows sitting directly under `<table>` are accepted as well.
pub fn body_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tbody" => rows.extend(children_named(child, "tr")),
            "tr" => rows.push(child),
            _ => {}
        }
    }
    rows
}

/// `<td>` cells of a row, left to right. `<th>` cells are not included.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    children_named(row, "td").collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <h2>1 ★☆ (Lv.1.5)</h2>
          <p>note</p>
          <div><span>x</span><table id="first"><tr><td> a
              b </td><th>h</th><td>c</td></tr></table></div>
          <div><table id="second"></table></div>
          <h2>No stars here</h2>
        </body></html>
    "#;

    #[test]
    fn finds_headers_by_text() {
        let doc = Html::parse_document(PAGE);
        let h2 = Selector::parse("h2").unwrap();
        let hits = headers_containing(&doc, &h2, "☆");
        assert_eq!(hits.len(), 1);
        assert_eq!(cell_text(hits[0]), "1 ★☆ (Lv.1.5)");
    }

    #[test]
    fn following_tables_skips_non_divs() {
        let doc = Html::parse_document(PAGE);
        let h2 = Selector::parse("h2").unwrap();
        let header = headers_containing(&doc, &h2, "☆")[0];
        let ids: Vec<_> = following_tables(header)
            .map(|t| t.value().attr("id").unwrap_or(""))
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn rows_and_cells_skip_th() {
        let doc = Html::parse_document(PAGE);
        let sel = Selector::parse("table#first").unwrap();
        let table = doc.select(&sel).next().unwrap();
        let rows = body_rows(table);
        assert_eq!(rows.len(), 1);
        let texts: Vec<_> = cells(rows[0]).into_iter().map(cell_text).collect();
        assert_eq!(texts, vec!["a b", "c"]);
    }

    #[test]
    fn lossy_decode_keeps_going() {
        let doc = parse_page(b"<p>ok\xff</p>");
        let p = Selector::parse("p").unwrap();
        assert!(cell_text(doc.select(&p).next().unwrap()).starts_with("ok"));
    }
}
