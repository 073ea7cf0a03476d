//! Chart Plotter Module
//! Creates the interactive scatter plot using egui_plot. Pan, zoom, hover
//! tooltips and redraw on resize are handled by egui_plot itself.

use crate::charts::{AxisSpec, ChartConfig, FieldKey};
use egui::{Color32, RichText, Vec2b};
use egui_plot::{Plot, PlotBounds, PlotPoint, PlotPoints, Points};

pub const POINT_COLOR: Color32 = Color32::from_rgb(54, 162, 235);
const POINT_RADIUS: f32 = 3.0;

/// Draws a [`ChartConfig`] with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Tooltip text for a hovered position. Prices are shown unrounded.
    pub fn format_tooltip(x_axis: &AxisSpec, y_axis: &AxisSpec, point: &PlotPoint) -> String {
        format!(
            "{}: {}\n{}: {}",
            x_axis.key.as_str(),
            Self::format_value(x_axis.key, point.x),
            y_axis.key.as_str(),
            Self::format_value(y_axis.key, point.y)
        )
    }

    fn format_value(key: FieldKey, value: f64) -> String {
        match key {
            FieldKey::Year => format!("{:.0}", value),
            FieldKey::Price => format!("{}", value),
        }
    }

    /// View the plot opens with: x at the axis clamp, y over the data.
    pub fn initial_bounds(config: &ChartConfig) -> PlotBounds {
        let (x_min, x_max) = config.x_display_range();
        let (y_min, y_max) = config.y_display_range();
        PlotBounds::from_min_max([x_min, y_min], [x_max, y_max])
    }

    /// Title heading followed by the scatter plot filling the remaining space.
    ///
    /// When `reset_view` is set the view jumps back to [`Self::initial_bounds`];
    /// otherwise egui_plot keeps whatever the user panned or zoomed to.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, config: &ChartConfig, reset_view: bool) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&config.title).size(18.0).strong());
        });
        ui.add_space(6.0);

        let x_axis = config.x_axis.clone();
        let y_axis = config.y_axis.clone();

        // Auto bounds would widen x past the clamp to fit every record.
        let plot = Plot::new("listing_scatter")
            .x_axis_label(config.x_axis.title.as_str())
            .y_axis_label(config.y_axis.title.as_str())
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_double_click_reset(false)
            .auto_bounds(Vec2b::new(false, false))
            .label_formatter(move |_name, point| Self::format_tooltip(&x_axis, &y_axis, point));

        // Every record is handed over; out-of-bounds points remain reachable by panning.
        let points: PlotPoints = config.plotted_points().into_iter().collect();
        let bounds = Self::initial_bounds(config);

        plot.show(ui, |plot_ui| {
            if reset_view {
                plot_ui.set_plot_bounds(bounds);
            }
            plot_ui.points(
                Points::new(points)
                    .radius(POINT_RADIUS)
                    .color(POINT_COLOR)
                    .name(config.title.as_str()),
            );
        });
    }
}
