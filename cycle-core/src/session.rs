use crate::chart::{assemble, ChartConfig};
use crate::error::Result;
use crate::granularity::SearchGranularity;
use crate::record::{earliest_date, Record};
use crate::selection::Selection;
use crate::series::{build_series, ChartData};
use crate::ui_state::should_show_fold_control;
use chrono::NaiveDate;
use cycle_utils::dates;

/// The records of one search, ready to be charted any number of ways.
///
/// The fold origin is fixed when the session is created, so changing the
/// selection never moves cycle boundaries. Every chart is rebuilt from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSession {
    records: Vec<Record>,
    granularity: SearchGranularity,
    origin: Option<NaiveDate>,
}

impl ChartSession {
    /// Session whose fold origin is the earliest record.
    pub fn new(records: Vec<Record>, granularity: SearchGranularity) -> Self {
        let origin = earliest_date(&records);
        Self {
            records,
            granularity,
            origin,
        }
    }

    /// Session with an externally chosen fold origin.
    pub fn with_origin(
        records: Vec<Record>,
        granularity: SearchGranularity,
        origin: NaiveDate,
    ) -> Self {
        Self {
            records,
            granularity,
            origin: Some(origin),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn granularity(&self) -> SearchGranularity {
        self.granularity
    }

    pub fn origin(&self) -> Option<NaiveDate> {
        self.origin
    }

    /// Series for `selection`, folded when the selection allows it.
    pub fn series(&self, selection: &Selection) -> ChartData {
        let origin_millis = self
            .origin
            .map(|origin| dates::to_timestamp_millis(&origin))
            .unwrap_or_default();
        build_series(
            &self.records,
            selection,
            selection.effective_fold(self.granularity),
            origin_millis,
        )
    }

    /// Run the full pipeline for `selection`.
    pub fn chart(&self, selection: &Selection) -> ChartConfig {
        let data = self.series(selection);
        log::info!(
            "chart {} {} vs {}: {} records, {} series",
            selection.graph_type,
            selection.y_axis,
            selection.x_axis,
            self.records.len(),
            data.series_count()
        );
        assemble(&data, selection)
    }

    /// Parse raw form values and chart them.
    pub fn chart_from_form(
        &self,
        x_axis: &str,
        y_axis: &str,
        graph_type: &str,
        fold_period: &str,
    ) -> Result<ChartConfig> {
        let selection = Selection::parse(x_axis, y_axis, graph_type, fold_period)?;
        Ok(self.chart(&selection))
    }

    pub fn fold_control_visible(&self, selection: &Selection) -> bool {
        should_show_fold_control(selection.x_axis, selection.graph_type, self.granularity)
    }
}
