//! Turns records into the point series a chart draws.

use crate::axis::GraphType;
use crate::fold::{FoldPeriod, PhaseFolder};
use crate::record::Record;
use crate::selection::Selection;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Colours walked in series creation order for folded charts.
pub const PALETTE: [&str; 16] = [
    "#9999ff", "#993366", "#ffffcc", "#ccffff", "#660066", "#ff8080", "#0066cc", "#ccccff",
    "#000080", "#ff00ff", "#ffff00", "#0000ff", "#800080", "#800000", "#008080", "#0000ff",
];

/// Point colour of an unfolded scatter chart.
pub const SCATTER_COLOR: &str = "rgba(0,0,255,1)";
/// Fill colour of bar/line charts.
pub const CATEGORY_COLOR: &str = "#49e2ff";

/// Palette colour of the `index`-th series, wrapping after 16.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Identifies a series: the single unfolded one, or one fold cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKey {
    Default,
    Cycle(i64),
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKey::Default => f.write_str("default"),
            SeriesKey::Cycle(cycle) => write!(f, "{cycle}"),
        }
    }
}

/// One plotted point. Dates are millisecond timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A named, coloured sequence of points on continuous axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub key: SeriesKey,
    pub label: String,
    pub color: &'static str,
    pub points: Vec<Point>,
}

/// Values drawn against discrete x labels (bar and line charts).
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub label: String,
    pub color: &'static str,
    /// x-axis values, index-aligned with `values`.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// The series of one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// Scatter series, one per fold cycle or a single default one.
    Points(Vec<Series>),
    /// Bar/line dataset.
    Categories(Vec<CategorySeries>),
}

impl ChartData {
    pub fn series_count(&self) -> usize {
        match self {
            ChartData::Points(series) => series.len(),
            ChartData::Categories(series) => series.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series_count() == 0
    }
}

/// Build the chart series for `records` in input order.
///
/// `fold` is applied only to a date x-axis on a scatter chart, with cycles
/// counted from `origin_millis`. Folded series appear in the order their cycle
/// is first met, which also decides their palette colour. An empty record set
/// gives no series.
pub fn build_series(
    records: &[Record],
    selection: &Selection,
    fold: FoldPeriod,
    origin_millis: i64,
) -> ChartData {
    if !selection.graph_type.is_scatter() {
        return build_categories(records, selection);
    }
    if records.is_empty() {
        return ChartData::Points(Vec::new());
    }
    let folder = if selection.x_axis.is_date() {
        PhaseFolder::new(origin_millis, fold)
    } else {
        None
    };
    match folder {
        Some(folder) => build_folded(records, selection, fold, &folder),
        None => build_scatter(records, selection),
    }
}

fn build_scatter(records: &[Record], selection: &Selection) -> ChartData {
    let points = records
        .iter()
        .map(|record| Point {
            x: selection.x_axis.coordinate(record),
            y: selection.y_axis.coordinate(record),
        })
        .collect();
    ChartData::Points(vec![Series {
        key: SeriesKey::Default,
        label: selection.y_axis.name().to_string(),
        color: SCATTER_COLOR,
        points,
    }])
}

fn build_folded(
    records: &[Record],
    selection: &Selection,
    fold: FoldPeriod,
    folder: &PhaseFolder,
) -> ChartData {
    let mut series: Vec<Series> = Vec::new();
    let mut index_of: HashMap<i64, usize> = HashMap::new();
    let period_name = fold.name();

    for record in records {
        let folded = folder.fold(selection.x_axis.coordinate(record));
        let point = Point {
            x: folded.offset_millis,
            y: selection.y_axis.coordinate(record),
        };
        let index = *index_of.entry(folded.cycle).or_insert_with(|| {
            let index = series.len();
            series.push(Series {
                key: SeriesKey::Cycle(folded.cycle),
                label: format!("{}_{}{}", selection.y_axis.name(), period_name, folded.cycle),
                color: palette_color(index),
                points: Vec::new(),
            });
            index
        });
        series[index].points.push(point);
    }
    log::debug!(
        "folded {} records into {} {} cycles",
        records.len(),
        series.len(),
        period_name
    );
    ChartData::Points(series)
}

fn build_categories(records: &[Record], selection: &Selection) -> ChartData {
    if records.is_empty() {
        return ChartData::Categories(Vec::new());
    }
    let graph_type: GraphType = selection.graph_type;
    let labels = records
        .iter()
        .map(|record| selection.x_axis.resolve(record, graph_type).as_label())
        .collect();
    let values = records
        .iter()
        .map(|record| selection.y_axis.coordinate(record))
        .collect();
    ChartData::Categories(vec![CategorySeries {
        label: selection.y_axis.name().to_string(),
        color: CATEGORY_COLOR,
        labels,
        values,
    }])
}
