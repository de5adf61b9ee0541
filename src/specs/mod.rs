// src/specs/mod.rs
//! # Page specs
//!
//! One module per wiki page shape. Each spec knows *where the data lives in
//! the HTML* and turns an already-parsed [`scraper::Html`] into plain values.
//!
//! ## What lives here
//! - Selector choice for each page (tier headers, recipe headers, number cell).
//! - Shaping of the engine's counts into output rows for that page.
//!
//! ## What does **not** live here
//! - Fetching or caching (`core::net`, `store`).
//! - Deciding where results go (`runner`, `file`).
//!
//! Specs never touch the network, so they are tested offline against inline
//! HTML fixtures.
pub mod gifts;
pub mod number;
pub mod recipe;
