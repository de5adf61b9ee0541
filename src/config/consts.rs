// src/config/consts.rs

// Net config
pub const CAPTURE_WIKI_URL: &str = "https://megido72wiki.com/index.php";
pub const MATERIAL_WIKI_URL: &str = "https://megido72material.swiki.jp/index.php";
pub const RECIPE_PAGE: &str = "霊宝レシピ";
pub const USER_AGENT: &str = concat!("mat_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Page structure
pub const GROUP_TAG: &str = "h2";
pub const STAR: &str = "☆"; // only tier headers carry it
pub const MAX_LEVEL: f64 = 10.0; // highest tier key a header may carry
pub const RECIPE_TAG: &str = "h4";
pub const RECIPE_TABLE_INDEX: usize = 1; // first table is the item's stats
pub const NUMBER_DIV_INDEX: usize = 1; // second div.ie5

// Local cache
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_CACHE_DIR: &str = "cache";

// Export
pub const DEFAULT_OUT_DIR: &str = "result";
pub const DEFAULT_ORDER_FILE: &str = "data/material_order.txt";
pub const RESULT_EXT: &str = "txt";
