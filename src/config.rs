//! Application settings, read from an optional JSON file in the working
//! directory.

use crate::charts::SurfaceSpec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const SETTINGS_FILE: &str = "car_listing_chart.json";
pub const DEFAULT_SURFACE_ID: &str = "price-by-year";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed settings {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw CSV directory and JSON output for the cleaning step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanSettings {
    pub raw_dir: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// JSON listing dataset.
    pub data_path: PathBuf,
    /// Surface the chart is mounted on.
    pub surface_id: String,
    /// Surfaces known to the host.
    pub surfaces: Vec<SurfaceSpec>,
    /// When set, raw CSVs are cleaned into a JSON dataset before loading.
    pub clean: Option<CleanSettings>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/cars.json"),
            surface_id: DEFAULT_SURFACE_ID.to_string(),
            surfaces: vec![SurfaceSpec::window(DEFAULT_SURFACE_ID, 1200.0, 800.0)],
            clean: None,
        }
    }
}

impl AppSettings {
    /// Load settings from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| SettingsError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
