//! Chart Configuration Module
//! Declarative description of the price-by-year scatter chart, plus the JSON
//! configuration shape handed to renderers.

use crate::data::ListingRecord;
use serde::{Deserialize, Serialize};

pub const CHART_TITLE: &str = "Price of listing by year of car";
pub const X_AXIS_TITLE: &str = "Year of car";
pub const Y_AXIS_TITLE: &str = "Price of car";
pub const YEAR_MIN: f64 = 1990.0;
pub const YEAR_MAX: f64 = 2025.0;

/// Fraction of the data span added above and below an auto-scaled axis.
const AUTO_PADDING: f64 = 0.1;

/// Kind of chart the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatter,
}

/// Record field an axis reads its coordinate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Year,
    Price,
}

impl FieldKey {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Year => "year",
            FieldKey::Price => "price",
        }
    }

    /// Read this field from a record, untransformed.
    pub fn read(self, record: &ListingRecord) -> f64 {
        match self {
            FieldKey::Year => f64::from(record.year),
            FieldKey::Price => record.price,
        }
    }
}

/// One axis: which field it plots, its optional display clamp and its title.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub key: FieldKey,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub title: String,
}

impl AxisSpec {
    pub fn new(key: FieldKey, title: impl Into<String>) -> Self {
        Self {
            key,
            min: None,
            max: None,
            title: title.into(),
        }
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Whether a coordinate falls inside the display clamp (inclusive).
    /// An axis without bounds shows everything.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Complete chart configuration. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub dataset: Vec<ListingRecord>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub title: String,
    pub show_legend: bool,
}

impl ChartConfig {
    /// Price-by-year scatter over `records`. The dataset is kept as given:
    /// no filtering, sorting or aggregation.
    pub fn price_by_year(records: Vec<ListingRecord>) -> Self {
        Self {
            kind: ChartKind::Scatter,
            dataset: records,
            x_axis: AxisSpec::new(FieldKey::Year, X_AXIS_TITLE).with_bounds(YEAR_MIN, YEAR_MAX),
            y_axis: AxisSpec::new(FieldKey::Price, Y_AXIS_TITLE),
            title: CHART_TITLE.to_string(),
            show_legend: false,
        }
    }

    /// Every record mapped to `[x, y]` through the axis field keys.
    pub fn plotted_points(&self) -> Vec<[f64; 2]> {
        self.dataset
            .iter()
            .map(|r| [self.x_axis.key.read(r), self.y_axis.key.read(r)])
            .collect()
    }

    /// Points inside the x-axis display clamp. Out-of-range records stay in
    /// the dataset; they are only outside the initial view.
    pub fn visible_points(&self) -> Vec<[f64; 2]> {
        self.plotted_points()
            .into_iter()
            .filter(|[x, _]| self.x_axis.contains(*x))
            .collect()
    }

    /// Initial x range: the axis clamp, or the data span when unbounded.
    pub fn x_display_range(&self) -> (f64, f64) {
        Self::display_range(&self.x_axis, self.plotted_points().iter().map(|[x, _]| *x))
    }

    /// Initial y range: the axis clamp, or every price in the dataset padded
    /// by 10%. Records outside the x clamp still count.
    pub fn y_display_range(&self) -> (f64, f64) {
        Self::display_range(&self.y_axis, self.plotted_points().iter().map(|[_, y]| *y))
    }

    fn display_range(axis: &AxisSpec, values: impl Iterator<Item = f64>) -> (f64, f64) {
        if let (Some(min), Some(max)) = (axis.min, axis.max) {
            return (min, max);
        }

        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !lo.is_finite() || !hi.is_finite() {
            return (axis.min.unwrap_or(0.0), axis.max.unwrap_or(1.0));
        }

        let span = hi - lo;
        let padding = if span > 0.0 {
            span * AUTO_PADDING
        } else {
            lo.abs().max(1.0) * AUTO_PADDING
        };
        (
            axis.min.unwrap_or(lo - padding),
            axis.max.unwrap_or(hi + padding),
        )
    }

    /// Renderer-facing configuration object.
    pub fn to_renderer_config(&self) -> RendererConfig {
        RendererConfig {
            kind: self.kind,
            data: RendererData {
                datasets: vec![RendererDataset {
                    data: self.dataset.clone(),
                    parsing: Parsing {
                        x_axis_key: self.x_axis.key,
                        y_axis_key: self.y_axis.key,
                    },
                }],
            },
            options: RendererOptions {
                plugins: Plugins {
                    title: TitleOption {
                        display: true,
                        text: self.title.clone(),
                    },
                    legend: LegendOption {
                        display: self.show_legend,
                    },
                },
                scales: Scales {
                    x_axis: ScaleOption::from_axis(&self.x_axis),
                    y_axis: ScaleOption::from_axis(&self.y_axis),
                },
            },
        }
    }

    pub fn to_renderer_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_renderer_config())
    }
}

/// `{ type, data: { datasets }, options: { plugins, scales } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: RendererData,
    pub options: RendererOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererData {
    pub datasets: Vec<RendererDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererDataset {
    pub data: Vec<ListingRecord>,
    pub parsing: Parsing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parsing {
    pub x_axis_key: FieldKey,
    pub y_axis_key: FieldKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererOptions {
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub title: TitleOption,
    pub legend: LegendOption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOption {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOption {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub x_axis: ScaleOption,
    pub y_axis: ScaleOption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOption {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max: Option<f64>,
    pub title: TitleOption,
}

impl ScaleOption {
    fn from_axis(axis: &AxisSpec) -> Self {
        Self {
            min: axis.min,
            max: axis.max,
            title: TitleOption {
                display: true,
                text: axis.title.clone(),
            },
        }
    }
}
