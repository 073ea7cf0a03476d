//! Static Chart Renderer
//! Draws the scatter chart into a bitmap with plotters and encodes it as PNG.
//!
//! Layout:
//! 1. Title centered at the top
//! 2. Cartesian plot over the configured display ranges
//! 3. Axis titles along both axes
//!
//! Points outside the x-axis bounds are clipped, not drawn.

use crate::charts::ChartConfig;
use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const POINT_COLOR: RGBColor = RGBColor(54, 162, 235);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render into a raw RGB buffer of `width * height * 3` bytes.
    pub fn render_rgb(config: &ChartConfig, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize { width, height });
        }

        let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            let (x_min, x_max) = config.x_display_range();
            let (y_min, y_max) = config.y_display_range();

            let mut chart = ChartBuilder::on(&root)
                .caption(&config.title, ("sans-serif", 28).into_font())
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(80)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(draw_err)?;

            chart
                .configure_mesh()
                .x_desc(config.x_axis.title.as_str())
                .y_desc(config.y_axis.title.as_str())
                .x_label_formatter(&|x| format!("{:.0}", x))
                .y_label_formatter(&|y| format!("{:.0}", y))
                .draw()
                .map_err(draw_err)?;

            let visible = config.visible_points();
            debug!(
                visible = visible.len(),
                total = config.dataset.len(),
                "drawing static scatter"
            );

            chart
                .draw_series(
                    visible
                        .iter()
                        .map(|&[x, y]| Circle::new((x, y), 3, POINT_COLOR.mix(0.6).filled())),
                )
                .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }
        Ok(buffer)
    }

    /// Render and encode as PNG bytes.
    pub fn render_png_bytes(config: &ChartConfig, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let buffer = Self::render_rgb(config, width, height)?;
        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(RenderError::InvalidSize { width, height })?;

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render and write a PNG file, creating parent directories as needed.
    pub fn render_to_file(
        config: &ChartConfig,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let bytes = Self::render_png_bytes(config, width, height)?;
        let io_err = |source| RenderError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, bytes).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ListingRecord;

    #[test]
    fn png_has_requested_size() {
        let config = ChartConfig::price_by_year(vec![
            ListingRecord::new(2010, 5000.0),
            ListingRecord::new(1985, 2000.0),
        ]);
        let bytes = StaticChartRenderer::render_png_bytes(&config, 640, 480).unwrap();

        use image::GenericImageView;
        let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!((img.width(), img.height()), (640, 480));
    }

    #[test]
    fn zero_size_is_rejected() {
        let config = ChartConfig::price_by_year(Vec::new());
        let err = StaticChartRenderer::render_rgb(&config, 0, 100).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize { .. }));
    }
}
