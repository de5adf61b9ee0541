// src/store.rs
// On-disk page cache. A cached page is used as-is; `reload` drops it first.

use std::{fs, path::Path};

use tracing::{debug, warn};

use crate::core::PageSource;
use crate::error::{Error, Result};
use crate::file::ensure_directory;

pub struct PageCache<'s> {
    source: &'s dyn PageSource,
    reload: bool,
}

impl<'s> PageCache<'s> {
    pub fn new(source: &'s dyn PageSource, reload: bool) -> Self {
        Self { source, reload }
    }

    /// Bytes of `url`, read from `cache` when present, else fetched and saved there.
    pub fn load(&self, url: &str, cache: &Path) -> Result<Vec<u8>> {
        if cache.is_file() {
            if self.reload {
                debug!("Dropping cached page {}", cache.display());
                fs::remove_file(cache).map_err(|e| Error::io(cache, e))?;
            } else {
                debug!("Using cached page {}", cache.display());
                return fs::read(cache).map_err(|e| Error::io(cache, e));
            }
        }

        let page = self.source.fetch(url)?;
        if let Err(e) = save(cache, &page) {
            // The run can still finish without a cache.
            warn!("Could not cache {url}: {e}");
        }
        Ok(page)
    }
}

fn save(path: &Path, page: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, page).map_err(|e| Error::io(path, e))
}
