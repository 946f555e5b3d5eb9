//! `chart` command: records to Chart.js configuration JSON.

use crate::{dataset, SourceArgs};
use anyhow::Context;
use cycle_core::{ChartConfig, ChartSession, Record, SearchGranularity, Selection};

pub fn run_chart(
    source: &SourceArgs,
    selection: &Selection,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let db = dataset::open(&source.rides_csv)?;
    let records = dataset::records(&db, source)?;
    let config = build_chart(records, source.granularity, selection);
    let json = config.to_json_pretty()?;
    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing chart to {path}"))?;
            log::info!("Chart with {} datasets written to {}", config.dataset_count(), path);
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Chart of `records`, folded from the earliest of them.
pub fn build_chart(
    records: Vec<Record>,
    granularity: SearchGranularity,
    selection: &Selection,
) -> ChartConfig {
    let session = ChartSession::new(records, granularity);
    let effective = selection.effective_fold(granularity);
    if effective != selection.fold_period {
        log::warn!(
            "fold {} does not apply to this selection, charting unfolded",
            selection.fold_period
        );
    }
    session.chart(selection)
}
