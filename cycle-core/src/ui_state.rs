//! Visibility of selection controls derived from the current selection.

use crate::axis::{AxisKind, GraphType};
use crate::fold::FoldPeriod;
use crate::granularity::SearchGranularity;

/// Whether the fold-period selector is offered.
///
/// Only a date x-axis on a scatter chart can be folded, and yearly records
/// already are one point per year.
pub fn should_show_fold_control(
    x_axis: AxisKind,
    graph_type: GraphType,
    granularity: SearchGranularity,
) -> bool {
    x_axis.is_date() && graph_type.is_scatter() && granularity != SearchGranularity::Years
}

/// Named fold periods that span more than one record of `granularity`,
/// starting with `FoldPeriod::None`.
pub fn fold_options(granularity: SearchGranularity) -> Vec<FoldPeriod> {
    FoldPeriod::NAMED
        .into_iter()
        .filter(|period| match period.length_days() {
            Some(days) => days > granularity.span_days(),
            None => true,
        })
        .collect()
}
