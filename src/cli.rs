// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;

use crate::config::consts::{DEFAULT_CACHE_DIR, DEFAULT_ORDER_FILE, DEFAULT_OUT_DIR};
use crate::config::options::{PageKind, RunOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    /// Gift materials per evolution tier of one megido
    Megido,
    /// Crafting recipe of one reiho
    Reiho,
}

/// Scrape material counts from the Megido 72 wikis into spreadsheet rows.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// What to scrape
    #[arg(value_enum)]
    pub mode: Mode,

    /// Page name (megido or reiho name, as on the wiki)
    pub name: String,

    /// Reload pages even if cached copies exist
    #[arg(short, long)]
    pub reload: bool,

    /// Column order file, one material per line
    #[arg(long, default_value = DEFAULT_ORDER_FILE)]
    pub order: PathBuf,

    /// Directory for cached pages
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Directory for results
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Print the rows instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> RunOptions {
        let page = match self.mode {
            Mode::Megido => PageKind::Gifts,
            Mode::Reiho => PageKind::Recipe,
        };
        let mut opts = RunOptions::new(page, self.name);
        opts.order_path = self.order;
        opts.cache_dir = self.cache_dir;
        opts.out_dir = self.out_dir;
        opts.reload = self.reload;
        opts.insecure = self.insecure;
        opts.to_stdout = self.stdout;
        opts
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.into_options();
    let summary = crate::runner::run(&opts)
        .wrap_err_with(|| format!("{} {:?} failed", opts.page.dir_name(), opts.name))?;

    match &summary.written {
        Some(path) => println!("Wrote {}", path.display()),
        None => println!("{}", summary.rendered.text),
    }
    if summary.rendered.unhandled > 0 {
        eprintln!("{} material(s) not in {}; see warnings above", summary.rendered.unhandled, opts.order_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_options() {
        let args = Args::try_parse_from(["mat_scrape", "megido", "アスモデウス"]).unwrap();
        let opts = args.into_options();
        assert_eq!(opts, RunOptions::new(PageKind::Gifts, "アスモデウス"));
    }

    #[test]
    fn flags_are_carried_over() {
        let args = Args::try_parse_from([
            "mat_scrape", "-r", "--stdout", "--order", "o.txt", "reiho", "霊宝A",
        ])
        .unwrap();
        let opts = args.into_options();
        assert_eq!(opts.page, PageKind::Recipe);
        assert!(opts.reload && opts.to_stdout);
        assert_eq!(opts.order_path, PathBuf::from("o.txt"));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["mat_scrape", "teams", "x"]).is_err());
    }

    #[test]
    fn output_format_is_not_selectable() {
        assert!(Args::try_parse_from(["mat_scrape", "--format", "csv", "megido", "x"]).is_err());
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
