// src/runner.rs
//! Sequencing for one run: pages → specs → formatter → text → file.

use std::path::PathBuf;

use scraper::Html;
use tracing::info;

use crate::{
    config::consts::{CAPTURE_WIKI_URL, MATERIAL_WIKI_URL, RECIPE_PAGE},
    config::options::{PageKind, RunOptions},
    core::{html::parse_page, net::wiki_url, sanitize::sanitize_filename, HttpSource, PageSource},
    tsv::rows_to_string,
    engine::{Formatter, OrderSpec},
    error::{Error, Result},
    file, specs,
    store::PageCache,
};

/// Formatted text plus the counts a caller may want to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub rows: usize,
    /// Unhandled items summed over all rows.
    pub unhandled: usize,
}

/// What a run produced.
pub struct RunSummary {
    pub rendered: Rendered,
    /// `None` when the text went to stdout.
    pub written: Option<PathBuf>,
}

/// Text block for a character's gift tiers, highest tier first.
pub fn render_gifts(formatter: &Formatter, name: &str, number: &str, material_page: &Html) -> Result<Rendered> {
    let groups = specs::gifts::extract(material_page).map_err(|e| Error::extract(join!(name, " (material wiki)"), e))?;
    let rows = specs::gifts::format(formatter, number, name, &groups);
    let unhandled = rows.iter().map(|r| r.unhandled.len()).sum();
    let lines: Vec<String> = rows.iter().map(|r| formatter.line(r)).collect();
    Ok(Rendered { text: rows_to_string(&lines), rows: rows.len(), unhandled })
}

/// Single-row text block for an item recipe.
pub fn render_recipe(formatter: &Formatter, name: &str, recipe_page: &Html) -> Result<Rendered> {
    let counts = specs::recipe::extract(recipe_page, name).map_err(|e| Error::extract(RECIPE_PAGE, e))?;
    let row = specs::recipe::format(formatter, name, &counts);
    Ok(Rendered { text: formatter.line(&row), rows: 1, unhandled: row.unhandled.len() })
}

/// Full run against the live wikis (or the page cache).
pub fn run(opts: &RunOptions) -> Result<RunSummary> {
    let source = HttpSource::new(opts.insecure)?;
    run_with(opts, &source)
}

/// Same as [`run`] with an injected page source.
pub fn run_with(opts: &RunOptions, source: &dyn PageSource) -> Result<RunSummary> {
    let order = OrderSpec::from_lines(&file::read_order(&opts.order_path)?);
    info!("Loaded {} order columns from {}", order.len(), opts.order_path.display());
    let formatter = Formatter::new(order);

    let cache = PageCache::new(source, opts.reload);
    let dir = opts.cache_subdir();
    let name = opts.name.as_str();
    let stem = sanitize_filename(name);

    let rendered = match opts.page {
        PageKind::Gifts => {
            let capture = cache.load(
                &wiki_url(CAPTURE_WIKI_URL, name)?,
                &dir.join(join!(&stem, "-capture.html")),
            )?;
            let number = specs::number::extract(&parse_page(&capture), name)
                .map_err(|e| Error::extract(join!(name, " (strategy wiki)"), e))?;

            let material = cache.load(
                &wiki_url(MATERIAL_WIKI_URL, name)?,
                &dir.join(join!(&stem, "-material.html")),
            )?;
            render_gifts(&formatter, name, &number, &parse_page(&material))?
        }
        PageKind::Recipe => {
            let page = cache.load(&wiki_url(MATERIAL_WIKI_URL, RECIPE_PAGE)?, &dir.join("reiho.html"))?;
            render_recipe(&formatter, name, &parse_page(&page))?
        }
    };

    let written = if opts.to_stdout {
        None
    } else {
        let path = file::write_result(&opts.out_path(), &rendered.text)?;
        info!("Wrote {} rows to {}", rendered.rows, path.display());
        Some(path)
    };

    Ok(RunSummary { rendered, written })
}
