use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{DATA_PATH, DataSource};
use crate::controller::ControllerOptions;
use crate::error::{ElecError, Result};
use crate::search::DEFAULT_VIEW_SIZE;

/// File name of the per-project config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "elecdex.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Layered load: defaults, then either the explicit file or the global
    /// and project files, then `ELECDEX_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("ELECDEX_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                ElecError::MissingConfig(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Path of the global config file, if the platform has a config directory.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("elecdex/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| ElecError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| ElecError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.data {
            self.data.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("ELECDEX_SITE_ROOT") {
            self.data.site_root = value;
        }
        if let Some(value) = lookup("ELECDEX_DATA_PATH") {
            self.data.path = value;
        }
        if let Some(value) = parse_env::<usize>("ELECDEX_DEFAULT_VIEW_SIZE", lookup("ELECDEX_DEFAULT_VIEW_SIZE"))? {
            self.search.default_view_size = value;
        }
        if let Some(value) = parse_env::<u64>("ELECDEX_DEBOUNCE_MS", lookup("ELECDEX_DEBOUNCE_MS"))? {
            self.search.debounce_ms = value;
        }
        if let Some(value) = lookup("ELECDEX_MACHINE") {
            self.output.machine = parse_bool("ELECDEX_MACHINE", &value)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.data.site_root.trim().is_empty() {
            return Err(ElecError::Config("data.site_root must not be empty".to_string()));
        }
        if self.data.path.trim().is_empty() {
            return Err(ElecError::Config("data.path must not be empty".to_string()));
        }
        // the blank-query view must show at least one item
        if self.search.default_view_size == 0 {
            return Err(ElecError::Config(
                "search.default_view_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Where the catalog document is read from.
    #[must_use]
    pub fn data_source(&self) -> DataSource {
        DataSource::resolve(&self.data.site_root, &self.data.path)
    }

    #[must_use]
    pub const fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            default_view_size: self.search.default_view_size,
            debounce: Duration::from_millis(self.search.debounce_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory or `http(s)://` base URL of the site.
    #[serde(default)]
    pub site_root: String,
    /// Data file path relative to the site root.
    #[serde(default)]
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            site_root: ".".to_string(),
            path: DATA_PATH.to_string(),
        }
    }
}

impl DataConfig {
    fn merge(&mut self, patch: DataPatch) {
        if let Some(value) = patch.site_root {
            self.site_root = value;
        }
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub default_view_size: usize,
    #[serde(default)]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_view_size: DEFAULT_VIEW_SIZE,
            debounce_ms: 300,
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.default_view_size {
            self.default_view_size = value;
        }
        if let Some(value) = patch.debounce_ms {
            self.debounce_ms = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit machine-readable JSON by default.
    #[serde(default)]
    pub machine: bool,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.machine {
            self.machine = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub data: Option<DataPatch>,
    pub search: Option<SearchPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataPatch {
    pub site_root: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub default_view_size: Option<usize>,
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub machine: Option<bool>,
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ElecError::Config(format!(
            "invalid {key} value {value}: expected true or false"
        ))),
    }
}

fn parse_env<T>(key: &str, value: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| ElecError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}
