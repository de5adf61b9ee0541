// src/config/options.rs
use std::path::PathBuf;

use crate::core::sanitize::sanitize_filename;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Per-tier gift materials of one character.
    Gifts,
    /// Crafting recipe of one item.
    Recipe,
}

impl PageKind {
    /// Subdirectory name for caches and results.
    pub fn dir_name(self) -> &'static str {
        match self {
            PageKind::Gifts => "megido",
            PageKind::Recipe => "reiho",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub page: PageKind,
    pub name: String,
    pub order_path: PathBuf,
    pub cache_dir: PathBuf,
    pub out_dir: PathBuf,
    pub reload: bool,       // ignore cached pages
    pub insecure: bool,     // skip TLS verification
    pub to_stdout: bool,    // print instead of writing a file
}

impl RunOptions {
    pub fn new(page: PageKind, name: impl Into<String>) -> Self {
        Self {
            page,
            name: name.into(),
            order_path: PathBuf::from(DEFAULT_ORDER_FILE),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            reload: false,
            insecure: false,
            to_stdout: false,
        }
    }

    pub fn cache_subdir(&self) -> PathBuf {
        self.cache_dir.join(self.page.dir_name())
    }

    /// `<out_dir>/<mode>/<name>.txt`
    pub fn out_path(&self) -> PathBuf {
        let stem = sanitize_filename(&self.name);
        self.out_dir
            .join(self.page.dir_name())
            .join(join!(&stem, ".", RESULT_EXT))
    }
}
