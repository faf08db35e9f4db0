use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use market_chart_rs::core::{AxisRange, AxisTickPlanner, DateIndex};

fn trading_days(count: u64) -> DateIndex {
    let start = NaiveDate::from_ymd_opt(2015, 3, 2).expect("date");
    DateIndex::new((0..count).map(|offset| start + Days::new(offset)).collect())
}

#[test]
fn hundred_samples_get_close_to_twelve_time_ticks() {
    let planner = AxisTickPlanner::default();
    let ticks = planner
        .discrete_ticks(&trading_days(100), 0.0, 880.0)
        .expect("ticks");

    assert!((11..=13).contains(&ticks.len()), "got {} ticks", ticks.len());
    assert!(
        ticks
            .windows(2)
            .all(|pair| pair[0].pixel_position < pair[1].pixel_position)
    );
    for tick in &ticks {
        assert!((0.0..=99.0).contains(&tick.value));
        assert_eq!(tick.value.fract(), 0.0);
    }
}

#[test]
fn time_tick_labels_come_from_the_date_index() {
    let planner = AxisTickPlanner::default();
    let ticks = planner
        .discrete_ticks(&trading_days(100), 120.0, 880.0)
        .expect("ticks");

    assert_eq!(ticks[0].label, "Mar 2");
    assert_relative_eq!(ticks[0].pixel_position, 120.0);
    // Index 9 is nine days after March 2.
    assert_eq!(ticks[1].value, 9.0);
    assert_eq!(ticks[1].label, "Mar 11");
}

#[test]
fn single_sample_has_no_time_ticks() {
    let planner = AxisTickPlanner::default();
    assert!(planner
        .discrete_ticks(&trading_days(1), 0.0, 880.0)
        .expect("ticks")
        .is_empty());
    assert!(planner
        .discrete_ticks(&trading_days(0), 0.0, 880.0)
        .expect("ticks")
        .is_empty());
}

#[test]
fn value_axis_has_ten_evenly_spaced_ticks() {
    let planner = AxisTickPlanner::default();
    let ticks = planner.continuous_ticks(AxisRange::new(10.0, 20.0), 500.0, 450.0);

    assert_eq!(ticks.len(), 10);
    assert_relative_eq!(ticks[0].value, 10.0);
    assert_relative_eq!(ticks[9].value, 20.0);
    assert_eq!(ticks[0].label, "10.00");
    assert_eq!(ticks[9].label, "20.00");

    // Ticks run bottom to top: height above the origin strictly increases.
    let heights: Vec<f64> = ticks.iter().map(|tick| 500.0 - tick.pixel_position).collect();
    assert!(heights.windows(2).all(|pair| pair[0] < pair[1]));
    assert_relative_eq!(heights[0], 0.0);
    assert_relative_eq!(heights[9], 450.0);
    for pair in heights.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], 50.0, epsilon = 1e-9);
    }
}

#[test]
fn flat_range_keeps_distinct_positions_with_identical_values() {
    let planner = AxisTickPlanner::default();
    let ticks = planner.continuous_ticks(AxisRange::new(42.0, 42.0), 300.0, 270.0);

    assert_eq!(ticks.len(), 10);
    assert!(ticks.iter().all(|tick| tick.label == "42.00"));
    assert!(
        ticks
            .windows(2)
            .all(|pair| pair[0].pixel_position > pair[1].pixel_position)
    );
}

#[test]
fn custom_label_pattern_and_counts_are_honored() {
    let planner = AxisTickPlanner {
        x_target_ticks: 3,
        y_tick_count: 3,
        date_label_pattern: "%Y-%m-%d".to_owned(),
        value_label_decimals: 1,
    };
    let x_ticks = planner
        .discrete_ticks(&trading_days(5), 0.0, 400.0)
        .expect("ticks");
    let labels: Vec<&str> = x_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["2015-03-02", "2015-03-04", "2015-03-06"]);

    let y_ticks = planner.continuous_ticks(AxisRange::new(0.0, 1.0), 100.0, 100.0);
    let labels: Vec<&str> = y_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["0.0", "0.5", "1.0"]);
}
