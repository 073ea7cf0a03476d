//! Chart Configurator
//! Parses the listing dataset, builds the chart configuration and mounts it
//! on a display surface.

use crate::charts::{ChartConfig, SurfaceHost};
use crate::data::{DataLoader, ListingRecord, LoaderError};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigureError {
    #[error("Data format error: {0}")]
    DataFormat(#[from] LoaderError),
    #[error("Display surface not found: '{0}'")]
    SurfaceNotFound(String),
}

/// One-shot construct-and-mount of the price-by-year chart.
pub struct ChartConfigurator;

impl ChartConfigurator {
    /// Parse `json`, build the chart and mount it on surface `surface_id`.
    ///
    /// Data is parsed before the surface is resolved. On any error the host
    /// is left untouched.
    pub fn configure(
        host: &mut SurfaceHost,
        surface_id: &str,
        json: &str,
    ) -> Result<(), ConfigureError> {
        let records = DataLoader::parse_records(json)?;
        Self::configure_records(host, surface_id, records)
    }

    /// Same as [`ChartConfigurator::configure`] for already parsed records.
    pub fn configure_records(
        host: &mut SurfaceHost,
        surface_id: &str,
        records: Vec<ListingRecord>,
    ) -> Result<(), ConfigureError> {
        let config = ChartConfig::price_by_year(records);
        info!(
            surface = surface_id,
            records = config.dataset.len(),
            visible = config.visible_points().len(),
            "configured price-by-year chart"
        );
        host.mount(surface_id, config)
    }
}
