use crate::axis::{AxisKind, GraphType};
use crate::error::Result;
use crate::fold::FoldPeriod;
use crate::granularity::SearchGranularity;
use crate::ui_state::should_show_fold_control;

/// What to plot: the axes, the chart type and the fold period.
///
/// A new value is built for every change of the selection controls; the
/// pipeline never keeps one between runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub x_axis: AxisKind,
    pub y_axis: AxisKind,
    pub graph_type: GraphType,
    pub fold_period: FoldPeriod,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            x_axis: AxisKind::Date,
            y_axis: AxisKind::Distance,
            graph_type: GraphType::Scatter,
            fold_period: FoldPeriod::None,
        }
    }
}

impl Selection {
    pub fn new(
        x_axis: AxisKind,
        y_axis: AxisKind,
        graph_type: GraphType,
        fold_period: FoldPeriod,
    ) -> Self {
        Self {
            x_axis,
            y_axis,
            graph_type,
            fold_period,
        }
    }

    /// Parse the four form values.
    pub fn parse(x_axis: &str, y_axis: &str, graph_type: &str, fold_period: &str) -> Result<Self> {
        Ok(Self {
            x_axis: x_axis.parse()?,
            y_axis: y_axis.parse()?,
            graph_type: graph_type.parse()?,
            fold_period: fold_period.parse()?,
        })
    }

    /// The fold period actually applied for records of `granularity`.
    ///
    /// Folding needs a date x-axis on a scatter chart and a period longer
    /// than one record; anything else is plotted unfolded.
    pub fn effective_fold(&self, granularity: SearchGranularity) -> FoldPeriod {
        let Some(days) = self.fold_period.length_days() else {
            return FoldPeriod::None;
        };
        if !should_show_fold_control(self.x_axis, self.graph_type, granularity) {
            log::debug!(
                "fold {} ignored for x={} type={} granularity={}",
                self.fold_period,
                self.x_axis,
                self.graph_type,
                granularity
            );
            return FoldPeriod::None;
        }
        if days <= granularity.span_days() {
            log::debug!(
                "fold {} not longer than one {} record, plotting unfolded",
                self.fold_period,
                granularity
            );
            return FoldPeriod::None;
        }
        self.fold_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;

    fn folded(period: FoldPeriod) -> Selection {
        Selection {
            fold_period: period,
            ..Selection::default()
        }
    }

    #[test]
    fn default_is_date_distance_scatter() {
        let selection = Selection::default();
        assert_eq!(selection.x_axis, AxisKind::Date);
        assert_eq!(selection.y_axis, AxisKind::Distance);
        assert_eq!(selection.graph_type, GraphType::Scatter);
        assert!(selection.fold_period.is_none());
    }

    #[test]
    fn parse_form_values() {
        let selection = Selection::parse("Date", "Speed", "scatter", "Week").unwrap();
        assert_eq!(
            selection,
            Selection::new(AxisKind::Date, AxisKind::Speed, GraphType::Scatter, FoldPeriod::Week)
        );
    }

    #[test]
    fn parse_reports_the_failing_axis() {
        assert_eq!(
            Selection::parse("Date", "Cadence", "scatter", "none"),
            Err(ChartError::UnsupportedAxis("Cadence".to_string()))
        );
    }

    #[test]
    fn fold_kept_for_daily_scatter() {
        for period in [FoldPeriod::Week, FoldPeriod::Month, FoldPeriod::Year] {
            assert_eq!(folded(period).effective_fold(SearchGranularity::Days), period);
        }
    }

    #[test]
    fn fold_coerced_for_yearly_records() {
        assert_eq!(
            folded(FoldPeriod::Year).effective_fold(SearchGranularity::Years),
            FoldPeriod::None
        );
    }

    #[test]
    fn fold_must_be_longer_than_granularity() {
        assert_eq!(
            folded(FoldPeriod::Week).effective_fold(SearchGranularity::Weeks),
            FoldPeriod::None
        );
        assert_eq!(
            folded(FoldPeriod::Month).effective_fold(SearchGranularity::Months),
            FoldPeriod::None
        );
        assert_eq!(
            folded(FoldPeriod::Year).effective_fold(SearchGranularity::Months),
            FoldPeriod::Year
        );
    }

    #[test]
    fn fold_coerced_off_date_axis_and_for_bars() {
        let mut selection = folded(FoldPeriod::Week);
        selection.x_axis = AxisKind::Speed;
        assert_eq!(selection.effective_fold(SearchGranularity::Days), FoldPeriod::None);

        let mut selection = folded(FoldPeriod::Week);
        selection.graph_type = GraphType::Bar;
        assert_eq!(selection.effective_fold(SearchGranularity::Days), FoldPeriod::None);
    }
}
