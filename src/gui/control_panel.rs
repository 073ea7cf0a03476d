//! Control Panel Widget
//! Left side panel with dataset summary and export controls.

use egui::{Color32, RichText};

/// Export settings for the static PNG render
#[derive(Clone, Debug)]
pub struct ExportSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 900,
        }
    }
}

/// Counts shown in the dataset summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub records: usize,
    pub visible: usize,
}

impl DatasetSummary {
    pub fn outside_range(&self) -> usize {
        self.records - self.visible
    }
}

/// Left side control panel.
pub struct ControlPanel {
    pub summary: DatasetSummary,
    pub export: ExportSettings,
    pub status: String,
}

impl ControlPanel {
    pub fn new(summary: DatasetSummary) -> Self {
        Self {
            summary,
            export: ExportSettings::default(),
            status: "Ready".to_string(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🚗 Car Listings")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Dataset Section =====
        ui.label(RichText::new("📁 Dataset").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("dataset_summary")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Listings:");
                        ui.label(self.summary.records.to_string());
                        ui.end_row();

                        ui.label("In year range:");
                        ui.label(self.summary.visible.to_string());
                        ui.end_row();

                        ui.label("Outside range:");
                        ui.label(
                            RichText::new(self.summary.outside_range().to_string())
                                .color(Color32::GRAY),
                        );
                        ui.end_row();
                    });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.label(RichText::new("🖼 Export").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Width:");
            ui.add(egui::DragValue::new(&mut self.export.width).range(200..=8000));
            ui.label("Height:");
            ui.add(egui::DragValue::new(&mut self.export.height).range(200..=8000));
        });

        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            if ui.button("↺ Reset View").clicked() {
                action = ControlPanelAction::ResetView;
            }
            ui.add_space(6.0);
            let button = egui::Button::new(RichText::new("📄 Export PNG").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::ExportPng;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ResetView,
    ExportPng,
}
