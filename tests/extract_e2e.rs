// tests/extract_e2e.rs
//
// Page → rows, offline, through the public API.
//
use mat_scrape::core::html::parse_page;
use mat_scrape::engine::{Formatter, OrderSpec};
use mat_scrape::runner::{render_gifts, render_recipe};
use mat_scrape::{Error, ExtractError};

const ONE_TIER: &str = r#"
<html><body>
  <h2 id="content_1_0">☆ ★★ (Lv.2.0)</h2>
  <div class="ie5"><table><tbody>
    <tr><td>1</td><td>-</td><td>Ore×2</td><td>-</td><td>-</td></tr>
    <tr><td>2</td><td>-</td><td>Gem</td><td>-</td><td>-</td></tr>
  </tbody></table></div>
</body></html>
"#;

const THREE_TIERS: &str = r#"
<html><body>
  <h2>1 ☆ ★☆ (Lv.1.5)</h2>
  <div><table><tbody>
    <tr><td>Ore×1</td><td>-</td><td>-</td></tr>
  </tbody></table></div>
  <h2>2 ☆ ★★★ (Lv.3.0)</h2>
  <div><table><tbody>
    <tr><td rowspan="2">合成</td><td>Ore×3</td><td>-</td></tr>
    <tr><td>Dust×2</td><td>-</td><td>-</td></tr>
    <tr><td>Mystery×7</td><td>-</td><td>-</td></tr>
  </tbody></table></div>
  <h2>3 ☆ ★★ (Lv.2.0)</h2>
  <div><table><tbody>
    <tr><td>Gem×4</td><td>-</td><td>-</td></tr>
  </tbody></table></div>
</body></html>
"#;

fn formatter() -> Formatter {
    Formatter::new(OrderSpec::from_lines("Ore\nGem\nDust\n"))
}

#[test]
fn single_tier_end_to_end() {
    let doc = parse_page(ONE_TIER.as_bytes());
    let out = render_gifts(&formatter(), "Name", "祖-001", &doc).unwrap();
    assert_eq!(out.text, "祖-001\tName\t★★\t2\t1\t0");
    assert_eq!(out.rows, 1);
    assert_eq!(out.unhandled, 0);
}

#[test]
fn header_without_hollow_star_is_not_a_tier() {
    // Only headers carrying ☆ start a tier; a bare ★★ heading is ignored.
    let page = r#"
        <h2>★★ (Lv.2.0)</h2>
        <div><table><tbody><tr><td>Ore×2</td><td>-</td><td>-</td></tr></tbody></table></div>"#;
    let out = render_gifts(&formatter(), "Name", "祖-001", &parse_page(page.as_bytes())).unwrap();
    assert_eq!(out.text, "");
    assert_eq!(out.rows, 0);
}

#[test]
fn huge_counts_do_not_wrap() {
    let page = r#"
        <h2>☆ ★★ (Lv.2.0)</h2>
        <div><table><tbody>
          <tr><td>Ore×4000000000</td><td>-</td><td>-</td></tr>
          <tr><td>Ore×4000000000</td><td>-</td><td>-</td></tr>
        </tbody></table></div>"#;
    let out = render_gifts(&formatter(), "N", "祖-001", &parse_page(page.as_bytes())).unwrap();
    assert_eq!(out.text, format!("祖-001\tN\t★★\t{}\t0\t0", u32::MAX));
}

#[test]
fn runaway_level_is_a_structural_error() {
    let page = r#"
        <h2>☆ (Lv.99999999999999999999)</h2>
        <div><table><tbody><tr><td>Ore×1</td><td>-</td><td>-</td></tr></tbody></table></div>"#;
    let err = render_gifts(&formatter(), "N", "祖-001", &parse_page(page.as_bytes())).unwrap_err();
    assert!(matches!(err, Error::Extract { source: ExtractError::LevelOutOfRange { .. }, .. }));
}

#[test]
fn tiers_are_emitted_highest_first() {
    let doc = parse_page(THREE_TIERS.as_bytes());
    let out = render_gifts(&formatter(), "N", "祖-002", &doc).unwrap();
    let lines: Vec<&str> = out.text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "祖-002\tN\t★★★\t3\t0\t2",
            "祖-002\tN\t★★\t0\t4\t0",
            "祖-002\tN\t★☆\t1\t0\t0",
        ]
    );
    // Mystery is not in the order
    assert_eq!(out.unhandled, 1);
}

#[test]
fn same_snapshot_same_bytes() {
    let a = render_gifts(&formatter(), "N", "祖-002", &parse_page(THREE_TIERS.as_bytes())).unwrap();
    let b = render_gifts(&formatter(), "N", "祖-002", &parse_page(THREE_TIERS.as_bytes())).unwrap();
    assert_eq!(a.text.as_bytes(), b.text.as_bytes());
}

#[test]
fn broken_tier_names_the_header_and_page() {
    let doc = parse_page("<h2>☆ ★★ (Lv.2.0)</h2><p>no table</p>".as_bytes());
    let err = render_gifts(&formatter(), "N", "祖-002", &doc).unwrap_err();
    match &err {
        Error::Extract { page, source } => {
            assert!(page.contains('N'));
            assert_eq!(source, &ExtractError::NoTable { header: "☆ ★★ (Lv.2.0)".into() });
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("no table follows header"));
}

#[test]
fn recipe_renders_one_row() {
    let page = r#"
        <h4>霊宝X</h4>
        <div><table><tr><td>stats</td></tr></table></div>
        <div><table>
          <tr><td>Gem×2</td><td>-</td><td>-</td></tr>
          <tr><td>Odd×1</td><td>-</td><td>-</td></tr>
        </table></div>"#;
    let out = render_recipe(&formatter(), "霊宝X", &parse_page(page.as_bytes())).unwrap();
    assert_eq!(out.text, "霊宝X\t0\t2\t0");
    assert_eq!(out.unhandled, 1);
}
