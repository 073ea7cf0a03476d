//! Car Listing Chart - scatter chart of listing price by model year
//!
//! The dataset is parsed into typed records, turned into a declarative
//! [`charts::ChartConfig`] and mounted on a named display surface. Rendering
//! and interaction belong to egui_plot (windows) and plotters (images).

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
