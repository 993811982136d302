//! Search controller: owns the catalog snapshot and drives filter-and-render.
//!
//! Keystrokes go through the debouncer; Enter bypasses it. Every execution
//! filters the snapshot and replaces the displayed [`ResultsArea`].

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::catalog::Catalog;
use crate::debounce::{DEFAULT_DELAY, Debouncer};
use crate::error::ElecError;
use crate::render::{self, ResultsArea};
use crate::search::{self, DEFAULT_VIEW_SIZE};

/// Tunables for a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub default_view_size: usize,
    pub debounce: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            default_view_size: DEFAULT_VIEW_SIZE,
            debounce: DEFAULT_DELAY,
        }
    }
}

#[derive(Debug)]
pub struct SearchController {
    catalog: Catalog,
    load_error: Option<String>,
    view_size: usize,
    debouncer: Debouncer<String>,
    area: ResultsArea,
    query: String,
    executions: u64,
}

impl SearchController {
    /// Build a controller from the outcome of the one-time load.
    ///
    /// A loaded catalog starts on the default view; a failed load starts on
    /// the failure notice and filters an empty collection from then on.
    #[must_use]
    pub fn new(loaded: Result<Catalog, ElecError>, options: ControllerOptions) -> Self {
        let (catalog, load_error, area) = match loaded {
            Ok(catalog) => {
                let view = render::build_view(search::search_with_view_size(
                    catalog.items(),
                    "",
                    options.default_view_size,
                ));
                (catalog, None, ResultsArea::Results { view })
            }
            Err(err) => {
                warn!(error = %err, "starting with an empty catalog");
                (Catalog::default(), Some(err.to_string()), ResultsArea::load_failed())
            }
        };

        Self {
            catalog,
            load_error,
            view_size: options.default_view_size,
            debouncer: Debouncer::new(options.debounce),
            area,
            query: String::new(),
            executions: 0,
        }
    }

    /// Schedule a debounced execution for `query`.
    pub fn on_input(&mut self, query: impl Into<String>, now: Instant) {
        let query = query.into();
        trace!(%query, "input scheduled");
        self.debouncer.trigger(query, now);
    }

    /// Execute `query` immediately, dropping any pending execution.
    pub fn on_enter(&mut self, query: impl Into<String>) -> &ResultsArea {
        if let Some(dropped) = self.debouncer.cancel() {
            trace!(query = %dropped, "pending input superseded by enter");
        }
        self.execute(query.into());
        &self.area
    }

    /// Fire the pending execution if it is due. Returns whether one ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                self.execute(query);
                true
            }
            None => false,
        }
    }

    fn execute(&mut self, query: String) {
        let matched = search::search_with_view_size(self.catalog.items(), &query, self.view_size);
        debug!(%query, matches = matched.len(), "search executed");

        self.area = ResultsArea::Results {
            view: render::build_view(matched),
        };
        self.query = query;
        self.executions += 1;
    }

    #[must_use]
    pub const fn area(&self) -> &ResultsArea {
        &self.area
    }

    /// Query of the most recent execution.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn executions(&self) -> u64 {
        self.executions
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// How long the event loop may wait before the next [`tick`](Self::tick).
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }
}
