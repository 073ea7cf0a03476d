//! Dataset Cleaner Module
//! Turns a directory of raw per-make CSV exports into the JSON listing dataset.

use polars::prelude::*;
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Columns converted from text to integers when present.
pub const INTEGER_FIELDS: [&str; 4] = ["tax", "price", "mileage", "year"];

/// File stems whose make name differs from the stem.
const FILENAME_TO_MAKE: [(&str, &str); 1] = [("merc", "mercedes")];

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("{file}: column '{column}' row {row} is not an integer: '{value}'")]
    InvalidInteger {
        file: String,
        column: String,
        row: usize,
        value: String,
    },
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Derive the car make from a raw CSV file name, e.g. `merc.csv` -> `Mercedes`.
pub fn make_from_filename(filename: &str) -> String {
    let stem = filename.replace(".csv", "");
    let mapped = FILENAME_TO_MAKE
        .iter()
        .find(|(from, _)| *from == stem)
        .map(|(_, to)| to.to_string())
        .unwrap_or(stem);

    let mut chars = mapped.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Converts raw CSV files to a single JSON array of listing objects.
pub struct DatasetCleaner;

impl DatasetCleaner {
    /// Clean every `*.csv` in `raw_dir` and write the combined array to `output`.
    ///
    /// Returns the number of rows written.
    pub fn clean_directory(raw_dir: &Path, output: &Path) -> Result<usize, CleanError> {
        let files = Self::list_csv_files(raw_dir)?;
        info!(dir = %raw_dir.display(), files = files.len(), "cleaning raw listing files");

        let per_file: Vec<Vec<Map<String, Value>>> = files
            .par_iter()
            .map(|path| Self::clean_file(path))
            .collect::<Result<_, _>>()?;

        let rows: Vec<Map<String, Value>> = per_file.into_iter().flatten().collect();
        Self::write_json(&rows, output)?;

        info!(rows = rows.len(), output = %output.display(), "wrote listing dataset");
        Ok(rows.len())
    }

    /// CSV files in `dir`, sorted by name so output order is stable.
    fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>, CleanError> {
        let io_err = |source| CleanError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Read one CSV with every column as text and convert its rows.
    pub fn clean_file(path: &Path) -> Result<Vec<Map<String, Value>>, CleanError> {
        let csv_err = |source: PolarsError| CleanError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let is_empty = std::fs::metadata(path)
            .map_err(|source| CleanError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .len()
            == 0;
        if is_empty {
            debug!(path = %path.display(), "empty CSV, no rows");
            return Ok(Vec::new());
        }

        // Schema inference over zero rows reads every column as String.
        let df = match LazyCsvReader::new(path)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(|lazy| lazy.collect())
        {
            Ok(df) => df,
            Err(PolarsError::NoData(_)) => return Ok(Vec::new()),
            Err(e) => return Err(csv_err(e)),
        };

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let make = make_from_filename(&filename);

        let mut rows: Vec<Map<String, Value>> = vec![Map::new(); df.height()];

        for column in df.get_columns() {
            let name = column.name().to_string();
            let values = column.str().map_err(csv_err)?;
            let is_integer = INTEGER_FIELDS.contains(&name.as_str());

            for (row, (slot, value)) in rows.iter_mut().zip(values.into_iter()).enumerate() {
                let json = if is_integer {
                    let raw = value.unwrap_or("");
                    let parsed = raw.trim().parse::<i64>().map_err(|_| CleanError::InvalidInteger {
                        file: filename.clone(),
                        column: name.clone(),
                        row,
                        value: raw.to_string(),
                    })?;
                    Value::from(parsed)
                } else {
                    // Empty cells stay empty strings, as in the raw export.
                    Value::from(value.unwrap_or(""))
                };
                slot.insert(name.clone(), json);
            }
        }

        for row in rows.iter_mut() {
            row.insert("make".to_string(), Value::from(make.clone()));
        }

        debug!(file = %filename, rows = rows.len(), make = %make, "cleaned file");
        Ok(rows)
    }

    fn write_json(rows: &[Map<String, Value>], output: &Path) -> Result<(), CleanError> {
        let io_err = |source| CleanError::Io {
            path: output.to_path_buf(),
            source,
        };

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut writer = BufWriter::new(File::create(output).map_err(io_err)?);
        serde_json::to_writer(&mut writer, rows)?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_is_capitalised() {
        assert_eq!(make_from_filename("audi.csv"), "Audi");
        assert_eq!(make_from_filename("vw.csv"), "Vw");
        assert_eq!(make_from_filename("BMW.csv"), "Bmw");
    }

    #[test]
    fn merc_maps_to_mercedes() {
        assert_eq!(make_from_filename("merc.csv"), "Mercedes");
    }

    #[test]
    fn empty_name_gives_empty_make() {
        assert_eq!(make_from_filename(".csv"), "");
    }
}
