//! Display Surfaces
//! Named targets a chart can be mounted on, and the host that resolves them.

use crate::charts::{ChartConfig, ConfigureError, StaticChartRenderer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum PresentError {
    #[error("Failed to render surface '{id}': {source}")]
    Render {
        id: String,
        #[source]
        source: crate::charts::RenderError,
    },
    #[error("Window surface '{id}' failed: {message}")]
    Window { id: String, message: String },
}

/// Where a surface draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Interactive native window (egui_plot).
    Window { width: f32, height: f32 },
    /// Static PNG written to disk (plotters).
    Image { path: PathBuf, width: u32, height: u32 },
}

/// Declared surface: identifier plus kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub id: String,
    #[serde(flatten)]
    pub kind: SurfaceKind,
}

impl SurfaceSpec {
    pub fn window(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            kind: SurfaceKind::Window { width, height },
        }
    }

    pub fn image(id: impl Into<String>, path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            kind: SurfaceKind::Image {
                path: path.into(),
                width,
                height,
            },
        }
    }
}

/// A surface and the chart currently mounted on it, if any.
#[derive(Debug)]
pub struct Surface {
    pub spec: SurfaceSpec,
    chart: Option<ChartConfig>,
}

impl Surface {
    pub fn chart(&self) -> Option<&ChartConfig> {
        self.chart.as_ref()
    }
}

/// Owns every display surface and hands mounted charts to their renderers.
#[derive(Debug, Default)]
pub struct SurfaceHost {
    surfaces: Vec<Surface>,
}

impl SurfaceHost {
    pub fn new(specs: impl IntoIterator<Item = SurfaceSpec>) -> Self {
        Self {
            surfaces: specs
                .into_iter()
                .map(|spec| Surface { spec, chart: None })
                .collect(),
        }
    }

    pub fn surface(&self, id: &str) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.spec.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surface(id).is_some()
    }

    /// Bind `config` to the surface `id`. An existing chart is replaced.
    pub fn mount(&mut self, id: &str, config: ChartConfig) -> Result<(), ConfigureError> {
        let surface = self
            .surfaces
            .iter_mut()
            .find(|s| s.spec.id == id)
            .ok_or_else(|| ConfigureError::SurfaceNotFound(id.to_string()))?;

        if surface.chart.is_some() {
            warn!(surface = id, "surface already has a chart, replacing it");
        }
        info!(surface = id, points = config.dataset.len(), "mounted chart");
        surface.chart = Some(config);
        Ok(())
    }

    /// Draw every mounted surface.
    ///
    /// Image surfaces are written first. The first mounted window surface
    /// then runs until it is closed; any further windows are skipped since a
    /// process gets one native event loop.
    pub fn present(self) -> Result<(), PresentError> {
        let mut window: Option<(String, f32, f32, ChartConfig)> = None;

        for surface in self.surfaces {
            let Some(chart) = surface.chart else {
                continue;
            };
            let id = surface.spec.id;

            match surface.spec.kind {
                SurfaceKind::Image {
                    path,
                    width,
                    height,
                } => {
                    StaticChartRenderer::render_to_file(&chart, &path, width, height)
                        .map_err(|source| PresentError::Render {
                            id: id.clone(),
                            source,
                        })?;
                    info!(surface = %id, path = %path.display(), "wrote image surface");
                }
                SurfaceKind::Window { width, height } => {
                    if window.is_some() {
                        warn!(surface = %id, "only one window surface can run, skipping");
                    } else {
                        window = Some((id, width, height, chart));
                    }
                }
            }
        }

        if let Some((id, width, height, chart)) = window {
            info!(surface = %id, "opening window");
            crate::gui::run_window(&id, width, height, chart).map_err(|e| {
                PresentError::Window {
                    id,
                    message: e.to_string(),
                }
            })?;
        }
        Ok(())
    }
}
