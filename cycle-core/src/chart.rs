//! Chart configuration handed to the Chart.js bridge.
//!
//! The structs serialize to the shape `new Chart(canvas, config)` expects.
//! Tick callbacks cannot travel through JSON, so each axis carries a
//! [`TickFormat`] tag that the bridge turns into a callback.

use crate::axis::{AxisKind, GraphType};
use crate::selection::Selection;
use crate::series::{ChartData, Point, SeriesKey};
use cycle_utils::dates;
use serde::Serialize;

const POINT_RADIUS: u32 = 2;
const HOVER_BACKGROUND_COLOR: &str = "#CCCCCC";
const HOVER_BORDER_COLOR: &str = "#666666";
const CATEGORY_BORDER_COLOR: &str = "#46d5f1";

/// A complete, renderable chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: GraphType,
    pub data: ChartDataConfig,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataConfig {
    /// Category labels, bar and line charts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatasetValues {
    Points(Vec<Point>),
    Values(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend text.
    pub label: String,
    pub data: DatasetValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<&'static str>,
    pub point_radius: u32,
    /// Connect the points of one fold cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: AxisScale,
    pub y: AxisScale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisScale {
    pub title: AxisTitle,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    pub format: TickFormat,
}

/// How tick values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TickFormat {
    /// Millisecond timestamps printed as `YYYY-MM-DD`.
    IsoDate,
    /// The value unchanged.
    Raw,
}

impl TickFormat {
    /// Date ticks only exist on continuous (scatter) date axes.
    pub fn for_axis(axis: AxisKind, graph_type: GraphType) -> Self {
        if axis.is_date() && graph_type.is_scatter() {
            TickFormat::IsoDate
        } else {
            TickFormat::Raw
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::IsoDate => {
                dates::format_timestamp_millis(value).unwrap_or_else(|| value.to_string())
            }
            TickFormat::Raw => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub zoom: ZoomPlugin,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomPlugin {
    pub zoom: ZoomOptions,
}

/// Wheel, drag-box and pinch zoom on both axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomOptions {
    pub wheel: Toggle,
    pub drag: Toggle,
    pub pinch: Toggle,
    pub mode: &'static str,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            wheel: Toggle { enabled: true },
            drag: Toggle { enabled: true },
            pinch: Toggle { enabled: true },
            mode: "xy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub box_width: u32,
    pub box_height: u32,
    pub padding: u32,
}

impl Default for LegendLabels {
    fn default() -> Self {
        Self {
            box_width: 5,
            box_height: 10,
            padding: 5,
        }
    }
}

impl ChartConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn dataset_count(&self) -> usize {
        self.data.datasets.len()
    }
}

/// Combine built series with axis titles, tick formats, zoom and legend.
pub fn assemble(data: &ChartData, selection: &Selection) -> ChartConfig {
    let (labels, datasets) = match data {
        ChartData::Points(series) => {
            let datasets = series
                .iter()
                .map(|s| match s.key {
                    SeriesKey::Cycle(_) => Dataset {
                        label: s.label.clone(),
                        data: DatasetValues::Points(s.points.clone()),
                        point_background_color: Some(s.color),
                        background_color: Some(s.color),
                        border_color: Some(s.color),
                        hover_background_color: None,
                        hover_border_color: None,
                        point_radius: POINT_RADIUS,
                        show_line: Some(true),
                    },
                    SeriesKey::Default => Dataset {
                        label: s.label.clone(),
                        data: DatasetValues::Points(s.points.clone()),
                        point_background_color: Some(s.color),
                        background_color: None,
                        border_color: None,
                        hover_background_color: Some(HOVER_BACKGROUND_COLOR),
                        hover_border_color: Some(HOVER_BORDER_COLOR),
                        point_radius: POINT_RADIUS,
                        show_line: None,
                    },
                })
                .collect();
            (None, datasets)
        }
        ChartData::Categories(series) => {
            let labels = series.first().map(|s| s.labels.clone()).unwrap_or_default();
            let datasets = series
                .iter()
                .map(|s| Dataset {
                    label: s.label.clone(),
                    data: DatasetValues::Values(s.values.clone()),
                    point_background_color: None,
                    background_color: Some(s.color),
                    border_color: Some(CATEGORY_BORDER_COLOR),
                    hover_background_color: Some(HOVER_BACKGROUND_COLOR),
                    hover_border_color: Some(HOVER_BORDER_COLOR),
                    point_radius: POINT_RADIUS,
                    show_line: None,
                })
                .collect();
            (Some(labels), datasets)
        }
    };

    ChartConfig {
        chart_type: selection.graph_type,
        data: ChartDataConfig { labels, datasets },
        options: ChartOptions {
            scales: Scales {
                x: axis_scale(selection.x_axis, selection.graph_type),
                y: axis_scale(selection.y_axis, selection.graph_type),
            },
            plugins: Plugins {
                zoom: ZoomPlugin {
                    zoom: ZoomOptions::default(),
                },
                legend: Legend {
                    display: data.series_count() > 1,
                    labels: LegendLabels::default(),
                },
            },
        },
    }
}

fn axis_scale(axis: AxisKind, graph_type: GraphType) -> AxisScale {
    AxisScale {
        title: AxisTitle {
            display: true,
            text: axis.name().to_string(),
        },
        ticks: Ticks {
            format: TickFormat::for_axis(axis, graph_type),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::FoldPeriod;
    use crate::record::Record;
    use crate::series::build_series;
    use chrono::NaiveDate;
    use cycle_utils::dates::to_timestamp_millis;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new(date(2024, 1, 1), 10.0, 1800, 20.0),
            Record::new(date(2024, 1, 8), 12.0, 2000, 21.6),
        ]
    }

    fn config_for(selection: &Selection, fold: FoldPeriod) -> ChartConfig {
        let origin = to_timestamp_millis(&date(2024, 1, 1));
        let data = build_series(&records(), selection, fold, origin);
        assemble(&data, selection)
    }

    #[test]
    fn tick_format_depends_on_axis_and_type() {
        assert_eq!(TickFormat::for_axis(AxisKind::Date, GraphType::Scatter), TickFormat::IsoDate);
        assert_eq!(TickFormat::for_axis(AxisKind::Date, GraphType::Bar), TickFormat::Raw);
        assert_eq!(TickFormat::for_axis(AxisKind::Speed, GraphType::Scatter), TickFormat::Raw);
    }

    #[test]
    fn tick_format_renders_values() {
        assert_eq!(TickFormat::IsoDate.format(1_704_672_000_000.0), "2024-01-08");
        assert_eq!(TickFormat::Raw.format(21.6), "21.6");
    }

    #[test]
    fn axis_titles_are_axis_names() {
        let selection = Selection {
            y_axis: AxisKind::Time,
            ..Selection::default()
        };
        let config = config_for(&selection, FoldPeriod::None);
        assert_eq!(config.options.scales.x.title.text, "Date");
        assert_eq!(config.options.scales.y.title.text, "Time");
        assert_eq!(config.options.scales.x.ticks.format, TickFormat::IsoDate);
        assert_eq!(config.options.scales.y.ticks.format, TickFormat::Raw);
    }

    #[test]
    fn zoom_is_always_enabled() {
        for graph_type in GraphType::ALL {
            let selection = Selection {
                graph_type,
                ..Selection::default()
            };
            let zoom = &config_for(&selection, FoldPeriod::None).options.plugins.zoom.zoom;
            assert!(zoom.wheel.enabled && zoom.drag.enabled && zoom.pinch.enabled);
            assert_eq!(zoom.mode, "xy");
        }
    }

    #[test]
    fn legend_only_for_several_series() {
        let single = config_for(&Selection::default(), FoldPeriod::None);
        assert!(!single.options.plugins.legend.display);

        let selection = Selection {
            fold_period: FoldPeriod::Week,
            ..Selection::default()
        };
        let folded = config_for(&selection, FoldPeriod::Week);
        assert!(folded.options.plugins.legend.display);
        assert_eq!(folded.dataset_count(), 2);
        assert_eq!(folded.data.datasets[1].show_line, Some(true));
    }

    #[test]
    fn serializes_to_chart_js_shape() {
        let selection = Selection {
            fold_period: FoldPeriod::Week,
            ..Selection::default()
        };
        let json = serde_json::to_value(config_for(&selection, FoldPeriod::Week)).unwrap();
        assert_eq!(json["type"], "scatter");
        assert!(json["data"].get("labels").is_none());
        assert_eq!(json["data"]["datasets"][0]["label"], "Distance_Week0");
        assert_eq!(json["data"]["datasets"][0]["pointBackgroundColor"], "#9999ff");
        assert_eq!(json["data"]["datasets"][0]["pointRadius"], 2);
        assert_eq!(json["data"]["datasets"][1]["data"][0]["y"], 12.0);
        assert_eq!(json["options"]["scales"]["x"]["ticks"]["format"], "isoDate");
        assert_eq!(json["options"]["scales"]["y"]["title"]["text"], "Distance");
        assert_eq!(json["options"]["plugins"]["zoom"]["zoom"]["mode"], "xy");
        assert_eq!(json["options"]["plugins"]["legend"]["labels"]["boxWidth"], 5);
    }

    #[test]
    fn bar_chart_serializes_labels_and_values() {
        let selection = Selection {
            graph_type: GraphType::Bar,
            ..Selection::default()
        };
        let json = serde_json::to_value(config_for(&selection, FoldPeriod::None)).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["data"]["labels"][1], "2024-01-08");
        assert_eq!(json["data"]["datasets"][0]["data"][1], 12.0);
        assert_eq!(json["data"]["datasets"][0]["borderColor"], CATEGORY_BORDER_COLOR);
        assert_eq!(json["options"]["scales"]["x"]["ticks"]["format"], "raw");
    }

    #[test]
    fn empty_data_still_assembles() {
        let selection = Selection::default();
        let config = assemble(&ChartData::Points(Vec::new()), &selection);
        assert_eq!(config.dataset_count(), 0);
        assert!(!config.options.plugins.legend.display);
        assert!(config.to_json().is_ok());

        let bar = Selection {
            graph_type: GraphType::Bar,
            ..Selection::default()
        };
        let config = assemble(&ChartData::Categories(Vec::new()), &bar);
        assert_eq!(config.data.labels, Some(Vec::new()));
    }
}
