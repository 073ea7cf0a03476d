//! Listing Data Loader Module
//! Parses the static JSON listing dataset into typed records.

use crate::data::ListingRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed listing data: {0}")]
    Format(#[from] serde_json::Error),
}

/// Loads listing records from JSON text or a JSON file.
pub struct DataLoader;

impl DataLoader {
    /// Parse a JSON array of listing objects.
    ///
    /// Each object must carry an integer `year` and a numeric `price`; other
    /// fields are ignored.
    pub fn parse_records(json: &str) -> Result<Vec<ListingRecord>, LoaderError> {
        let records: Vec<ListingRecord> = serde_json::from_str(json)?;
        debug!(count = records.len(), "parsed listing records");
        Ok(records)
    }

    /// Read a JSON file from disk. Parsing is left to the caller.
    pub fn read_json(path: &Path) -> Result<String, LoaderError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = text.len(), "read listing dataset");
        Ok(text)
    }

    /// Read and parse a JSON file in one step.
    pub fn load_json(path: &Path) -> Result<Vec<ListingRecord>, LoaderError> {
        let text = Self::read_json(path)?;
        Self::parse_records(&text)
    }
}
