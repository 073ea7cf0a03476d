//! Car Listing Chart - price of listing by year of car
//!
//! Loads the listing dataset and shows it as an interactive scatter chart.

use anyhow::Context;
use car_listing_chart::charts::{ChartConfigurator, SurfaceHost};
use car_listing_chart::config::{AppSettings, SETTINGS_FILE};
use car_listing_chart::data::{DataLoader, DatasetCleaner};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("car_listing_chart=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let settings = AppSettings::load(Path::new(SETTINGS_FILE))?;

    if let Some(clean) = &settings.clean {
        let rows = DatasetCleaner::clean_directory(&clean.raw_dir, &clean.output)
            .context("cleaning raw listing files")?;
        info!(rows, "dataset cleaned");
    }

    let json = DataLoader::read_json(&settings.data_path).context("reading listing dataset")?;

    let mut host = SurfaceHost::new(settings.surfaces.clone());
    ChartConfigurator::configure(&mut host, &settings.surface_id, &json)
        .context("configuring price-by-year chart")?;

    host.present().context("presenting chart")?;
    Ok(())
}
