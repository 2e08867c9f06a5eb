//! View-model composition for the intraday line chart: an origin-filled line
//! with a time x-axis, recolored by the theme flag.

use serde::Serialize;

use crate::domain::ChartSeries;

const DARK_LINE: &str = "rgb(13, 202, 240)";
const DARK_LABEL: &str = "rgb(255, 255, 255)";
const DARK_FILL: &str = "rgb(67 202 240 / 10%)";
const LIGHT_LINE: &str = "rgb(58, 64, 80)";
const LIGHT_FILL: &str = "rgb(0 0 0 / 10%)";

/// Theme flag supplied by the embedding surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartTheme {
    #[default]
    Light,
    Dark,
}

/// Time x-axis configuration for the chart widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisConfig {
    pub kind: &'static str,
    pub unit: &'static str,
    pub minute_format: &'static str,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            kind: "time",
            unit: "day",
            minute_format: "HH:mm",
        }
    }
}

/// Everything the chart widget needs to draw one submission's series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartView {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub line_color: &'static str,
    pub label_color: &'static str,
    pub fill_color: &'static str,
    pub fill_target: &'static str,
    pub x_axis: AxisConfig,
}

impl LineChartView {
    pub fn compose(series: &ChartSeries, label: impl Into<String>, theme: ChartTheme) -> Self {
        let (line_color, label_color, fill_color) = match theme {
            ChartTheme::Dark => (DARK_LINE, DARK_LABEL, DARK_FILL),
            ChartTheme::Light => (LIGHT_LINE, LIGHT_LINE, LIGHT_FILL),
        };

        Self {
            label: label.into(),
            labels: series.labels.clone(),
            values: series.values.clone(),
            line_color,
            label_color,
            fill_color,
            fill_target: "origin",
            x_axis: AxisConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ChartSeries {
        ChartSeries {
            labels: vec![
                String::from("2024-03-05 09:30:00"),
                String::from("2024-03-05 09:35:00"),
            ],
            values: vec![150.0, 151.2],
        }
    }

    #[test]
    fn dark_theme_selects_the_dark_palette() {
        let view = LineChartView::compose(&series(), "AAPL", ChartTheme::Dark);
        assert_eq!(view.line_color, "rgb(13, 202, 240)");
        assert_eq!(view.label_color, "rgb(255, 255, 255)");
        assert_eq!(view.fill_color, "rgb(67 202 240 / 10%)");
    }

    #[test]
    fn light_theme_uses_one_color_for_line_and_labels() {
        let view = LineChartView::compose(&series(), "AAPL", ChartTheme::Light);
        assert_eq!(view.line_color, "rgb(58, 64, 80)");
        assert_eq!(view.label_color, view.line_color);
        assert_eq!(view.fill_color, "rgb(0 0 0 / 10%)");
    }

    #[test]
    fn series_and_label_carry_through_unchanged() {
        let view = LineChartView::compose(&series(), "AAPL", ChartTheme::Light);
        assert_eq!(view.label, "AAPL");
        assert_eq!(view.labels, series().labels);
        assert_eq!(view.values, series().values);
        assert_eq!(view.fill_target, "origin");
        assert_eq!(view.x_axis, AxisConfig::default());
    }
}
