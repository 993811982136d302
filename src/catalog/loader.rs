//! One-shot catalog loading from a site root.
//!
//! The data file lives at a fixed path relative to the site root, which is
//! either a directory on disk or an `http(s)://` base URL. There is no
//! timeout, retry or refresh: whatever happens on the first load is final.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, error, info};

use super::Catalog;
use crate::error::{ElecError, LoadFailureKind, Result};

/// Location of the catalog document relative to the site root.
pub const DATA_PATH: &str = "data/electronics.json";

const USER_AGENT: &str = concat!("elecdex/", env!("CARGO_PKG_VERSION"));

/// Where the catalog document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Resolve `path` against `site_root`.
    #[must_use]
    pub fn resolve(site_root: &str, path: &str) -> Self {
        if is_remote(site_root) {
            let base = site_root.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            Self::Url(format!("{base}/{path}"))
        } else {
            Self::File(Path::new(site_root).join(path))
        }
    }

    #[must_use]
    pub fn location(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

fn is_remote(site_root: &str) -> bool {
    site_root.starts_with("http://") || site_root.starts_with("https://")
}

/// Load the catalog once. Every failure is reported as `ElecError::LoadFailure`.
pub fn load_catalog(source: &DataSource) -> Result<Catalog> {
    let location = source.location();
    debug!(%location, "loading electronics catalog");

    let loaded = match source {
        DataSource::File(path) => read_file(path, &location),
        DataSource::Url(url) => fetch_url(url),
    }
    .and_then(|raw| parse_document(&location, &raw));

    match &loaded {
        Ok(catalog) => info!(%location, items = catalog.len(), "catalog loaded"),
        Err(err) => error!(%location, error = %err, "catalog load failed"),
    }
    loaded
}

fn read_file(path: &Path, location: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| {
        let kind = if err.kind() == io::ErrorKind::NotFound {
            LoadFailureKind::NotFound
        } else {
            LoadFailureKind::Transport
        };
        ElecError::load_failure(location, kind, err.to_string())
    })
}

fn fetch_url(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| {
            ElecError::load_failure(url, LoadFailureKind::Transport, format!("http client: {err}"))
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|err| ElecError::load_failure(url, LoadFailureKind::Transport, err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let kind = if status == reqwest::StatusCode::NOT_FOUND {
            LoadFailureKind::NotFound
        } else {
            LoadFailureKind::HttpStatus(status.as_u16())
        };
        return Err(ElecError::load_failure(url, kind, format!("HTTP {status}")));
    }

    response
        .text()
        .map_err(|err| ElecError::load_failure(url, LoadFailureKind::Transport, err.to_string()))
}

fn parse_document(location: &str, raw: &str) -> Result<Catalog> {
    Catalog::from_json(raw)
        .map_err(|err| ElecError::load_failure(location, LoadFailureKind::Malformed, err.to_string()))
}
