// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod file;
pub mod log;
pub mod runner;
pub mod specs;
pub mod store;
pub mod tsv;

pub use error::{Error, ExtractError, Result};
