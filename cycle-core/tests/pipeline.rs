use chrono::NaiveDate;
use cycle_core::series::PALETTE;
use cycle_core::{
    AxisKind, ChartData, ChartSession, FoldPeriod, GraphType, Record, SearchGranularity,
    Selection, SeriesKey, TickFormat,
};
use cycle_utils::dates::{to_timestamp_millis, MILLIS_PER_DAY};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn two_week_rides() -> Vec<Record> {
    serde_json::from_str(
        r#"[
            {"Date":"2024-01-01","KM":10,"Seconds":1800,"KMH":20},
            {"Date":"2024-01-08","KM":12,"Seconds":2000,"KMH":21.6}
        ]"#,
    )
    .unwrap()
}

#[test]
fn weekly_fold_of_two_rides() {
    let session =
        ChartSession::with_origin(two_week_rides(), SearchGranularity::Days, date(2024, 1, 1));
    let selection = Selection::new(
        AxisKind::Date,
        AxisKind::Distance,
        GraphType::Scatter,
        FoldPeriod::Week,
    );

    let data = session.series(&selection);
    let ChartData::Points(series) = &data else {
        panic!("scatter chart should produce point series");
    };
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].key, SeriesKey::Cycle(0));
    assert_eq!(series[1].key, SeriesKey::Cycle(1));

    let start = to_timestamp_millis(&date(2024, 1, 1)) as f64;
    let end = start + 7.0 * MILLIS_PER_DAY as f64;
    for s in series {
        assert_eq!(s.points.len(), 1);
        let x = s.points[0].x;
        assert!(x >= start && x < end, "offset {x} outside first week");
    }

    let config = session.chart(&selection);
    assert_eq!(config.dataset_count(), 2);
    assert_eq!(config.options.scales.x.ticks.format, TickFormat::IsoDate);
    assert!(config.options.plugins.legend.display);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["data"]["datasets"][0]["label"], "Distance_Week0");
    assert_eq!(json["data"]["datasets"][1]["label"], "Distance_Week1");
    assert_eq!(json["data"]["datasets"][1]["borderColor"], PALETTE[1]);
}

#[test]
fn seventeen_weeks_reuse_the_first_colour() {
    let rides: Vec<Record> = (0..17)
        .map(|week| {
            Record::from_ride(date(2024, 1, 1) + chrono::Duration::weeks(week), 8.0, 1200)
        })
        .collect();
    let session = ChartSession::new(rides, SearchGranularity::Days);
    let selection = Selection {
        fold_period: FoldPeriod::Week,
        ..Selection::default()
    };
    let config = session.chart(&selection);
    let datasets = &config.data.datasets;
    assert_eq!(datasets.len(), 17);
    assert_eq!(datasets[16].border_color, datasets[0].border_color);
    assert_eq!(datasets[0].border_color, Some(PALETTE[0]));
}

#[test]
fn switching_selection_keeps_the_session() {
    let session = ChartSession::new(two_week_rides(), SearchGranularity::Days);

    let bar = Selection::new(
        AxisKind::Date,
        AxisKind::Time,
        GraphType::Bar,
        FoldPeriod::Week,
    );
    let config = session.chart(&bar);
    assert_eq!(
        config.data.labels,
        Some(vec!["2024-01-01".to_string(), "2024-01-08".to_string()])
    );
    assert!(!session.fold_control_visible(&bar));

    let scatter = Selection::default();
    assert!(session.fold_control_visible(&scatter));
    assert_eq!(session.chart(&scatter).dataset_count(), 1);
}

#[test]
fn empty_record_set_is_a_valid_chart() {
    let session = ChartSession::new(Vec::new(), SearchGranularity::Days);
    for graph_type in GraphType::ALL {
        let selection = Selection {
            graph_type,
            ..Selection::default()
        };
        let config = session.chart(&selection);
        assert_eq!(config.dataset_count(), 0);
        assert!(config.to_json().is_ok());
    }
}
