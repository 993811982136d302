//! Per-invocation application context.

use std::path::Path;

use tracing::debug;

use crate::catalog::{self, Catalog, DataSource};
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::controller::SearchController;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::from_cli_in(cli, &cwd)
    }

    /// Build the context with `project_root` as the directory searched for
    /// `elecdex.toml`.
    pub fn from_cli_in(cli: &Cli, project_root: &Path) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref(), project_root)?;
        if let Some(site_root) = &cli.site_root {
            config.data.site_root.clone_from(site_root);
        }

        let output_format = cli.effective_output_format(config.output.machine);
        let robot_mode = output_format.is_machine_readable();
        debug!(?output_format, site_root = %config.data.site_root, "context ready");

        Ok(Self {
            config,
            output_format,
            robot_mode,
        })
    }

    #[must_use]
    pub fn data_source(&self) -> DataSource {
        self.config.data_source()
    }

    /// Run the one-time catalog load.
    pub fn load_catalog(&self) -> Result<Catalog> {
        catalog::load_catalog(&self.data_source())
    }

    /// Load the catalog and hand the outcome to a fresh controller.
    #[must_use]
    pub fn controller(&self) -> SearchController {
        SearchController::new(self.load_catalog(), self.config.controller_options())
    }
}
