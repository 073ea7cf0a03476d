//! Chart Viewer Widget
//! Central panel showing the mounted scatter chart.

use crate::charts::{ChartConfig, ChartPlotter};

/// Holds the one chart a window surface displays. An empty dataset still
/// shows the titled, empty plot.
pub struct ChartViewer {
    pub config: ChartConfig,
    /// Apply the initial bounds on the next frame.
    reset_pending: bool,
}

impl ChartViewer {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            reset_pending: true,
        }
    }

    /// Return to the clamped initial view on the next frame.
    pub fn reset_view(&mut self) {
        self.reset_pending = true;
    }

    /// Whether this frame should apply the initial bounds. Clears the request.
    fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_pending)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let reset = self.take_reset();
        ChartPlotter::draw_scatter_chart(ui, &self.config, reset);
    }
}
