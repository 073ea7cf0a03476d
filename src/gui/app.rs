//! Listing Chart Main Application
//! Window surface with control panel and chart viewer.

use crate::charts::{ChartConfig, StaticChartRenderer};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, DatasetSummary};
use egui::SidePanel;
use tracing::{error, info, warn};

/// Main application window for one mounted chart.
pub struct ListingChartApp {
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl ListingChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ChartConfig) -> Self {
        let summary = DatasetSummary {
            records: config.dataset.len(),
            visible: config.visible_points().len(),
        };
        Self {
            control_panel: ControlPanel::new(summary),
            chart_viewer: ChartViewer::new(config),
        }
    }

    /// Ask for a target path, render the chart statically and open the result.
    fn handle_export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("price_by_year.png")
            .save_file()
        else {
            return; // User cancelled
        };

        let settings = self.control_panel.export.clone();
        match StaticChartRenderer::render_to_file(
            &self.chart_viewer.config,
            &path,
            settings.width,
            settings.height,
        ) {
            Ok(()) => {
                info!(path = %path.display(), "exported chart image");
                self.control_panel
                    .set_status(&format!("Exported {}", path.display()));
                if let Err(e) = open::that(&path) {
                    warn!(error = %e, "could not open exported image");
                }
            }
            Err(e) => {
                error!(error = %e, "chart export failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for ListingChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(220.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                match self.control_panel.show(ui) {
                    ControlPanelAction::ResetView => self.chart_viewer.reset_view(),
                    ControlPanelAction::ExportPng => self.handle_export_png(),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Open a native window titled `surface_id` and run it until closed.
pub fn run_window(surface_id: &str, width: f32, height: f32, config: ChartConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 420.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        surface_id,
        options,
        Box::new(move |cc| Ok(Box::new(ListingChartApp::new(cc, config)))),
    )
}
