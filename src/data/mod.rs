//! Data module - listing dataset loading and raw CSV cleaning

mod cleaner;
mod loader;
mod record;

pub use cleaner::{make_from_filename, CleanError, DatasetCleaner, INTEGER_FIELDS};
pub use loader::{DataLoader, LoaderError};
pub use record::ListingRecord;
