pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod render;
pub mod search;
pub mod tui;

pub use error::{ElecError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
