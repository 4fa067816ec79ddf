//! Integration tests for the full crossing scan.
//!
//! Exercises the detector against market-shaped data: an oscillating fast
//! series versus its own trailing moving average, the way a price is
//! compared to a 5-period MA.

use xover_detector::CrossingDetector;

/// Oscillating "price" series: several full cycles around 10.0.
fn oscillating_prices(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 10.0 + 2.0 * (i as f64 * 0.7).sin())
        .collect()
}

/// Trailing moving average with the given window (shorter prefix windows at
/// the start, so the output has the same length as the input).
fn trailing_average(series: &[f64], window: usize) -> Vec<f64> {
    (0..series.len())
        .map(|i| {
            let start = i.saturating_sub(window - 1);
            let slice = &series[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

fn oscillating_detector() -> CrossingDetector {
    let prices = oscillating_prices(40);
    let ma5 = trailing_average(&prices, 5);
    CrossingDetector::new(prices, ma5).unwrap()
}

#[test]
fn test_oscillating_series_produces_both_crossing_types() {
    let result = oscillating_detector().perform();
    assert!(!result.golden.is_empty(), "expected at least one golden cross");
    assert!(!result.death.is_empty(), "expected at least one death cross");
}

#[test]
fn test_result_lists_are_strictly_increasing() {
    let result = oscillating_detector().perform();
    assert!(result.golden.windows(2).all(|w| w[0] < w[1]));
    assert!(result.death.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_result_lists_are_disjoint() {
    let result = oscillating_detector().perform();
    assert!(result.golden.iter().all(|i| !result.death.contains(i)));
}

#[test]
fn test_results_never_contain_endpoints() {
    let det = oscillating_detector();
    let last = det.len() - 1;
    let result = det.perform();
    for &i in result.golden.iter().chain(result.death.iter()) {
        assert!(i >= 1 && i < last, "endpoint index {i} in results");
    }
}

#[test]
fn test_repeated_perform_is_deterministic() {
    let det = oscillating_detector();
    let first = det.perform();
    assert_eq!(first, det.perform());
    assert_eq!(first, det.perform());
}

#[test]
fn test_no_index_is_both_golden_and_death() {
    let det = oscillating_detector();
    for record in det.info() {
        assert!(!record.both_crossings, "index {} flagged both", record.index);
    }
}

#[test]
fn test_slope_flags_co_true_only_when_flat() {
    let det = oscillating_detector();
    for record in det.info() {
        if record.negative_and_positive {
            let w = det.window(record.index).unwrap();
            assert_eq!(w.slope(), 0.0, "index {} not flat", record.index);
        }
    }
}

#[test]
fn test_parallel_flags_co_true_only_when_window_is_flat_touching() {
    let det = oscillating_detector();
    for record in det.info() {
        if record.above_and_below {
            let w = det.window(record.index).unwrap();
            assert_eq!(w.fast, w.slow, "index {} not touching", record.index);
        }
    }
}

#[test]
fn test_info_covers_every_interior_index_in_order() {
    let det = oscillating_detector();
    let indices: Vec<usize> = det.info().iter().map(|r| r.index).collect();
    let expected: Vec<usize> = (1..det.len() - 1).collect();
    assert_eq!(indices, expected);
}

#[test]
fn test_crossings_agree_with_per_index_predicates() {
    let det = oscillating_detector();
    let result = det.perform();
    for record in det.info() {
        assert_eq!(
            record.golden_crossing,
            result.golden.contains(&record.index)
        );
        // golden wins the index when both would match, so the death list
        // holds exactly the death-flagged indices that are not golden
        assert_eq!(
            record.death_crossing && !record.golden_crossing,
            result.death.contains(&record.index)
        );
    }
}

#[test]
fn test_result_serializes_with_named_lists() {
    let result = oscillating_detector().perform();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("golden").unwrap().is_array());
    assert!(json.get("death").unwrap().is_array());
}

#[test]
fn test_diagnostic_record_serializes_classifier_state() {
    let records = oscillating_detector().info();
    let json = serde_json::to_value(&records[0]).unwrap();
    for key in [
        "index",
        "value",
        "parallel_above",
        "parallel_below",
        "negative_slope",
        "positive_slope",
        "golden_crossing",
        "death_crossing",
        "both_crossings",
        "above_and_below",
        "negative_and_positive",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}
