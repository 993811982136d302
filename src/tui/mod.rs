//! Terminal user interface for elecdex.
//!
//! Built on ratatui with the crossterm backend.

pub mod browse;

pub use browse::{BrowseTui, run_browse_tui};
