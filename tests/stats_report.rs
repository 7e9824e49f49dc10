use std::error::Error;

use plandag::stats::{RunStats, StatsAggregator};

type TestResult = Result<(), Box<dyn Error>>;

fn run(result: &str, success: bool, states: usize, frontier: usize) -> RunStats {
    RunStats {
        result: result.to_string(),
        success,
        number_of_states: states,
        number_of_frontier_states: frontier,
    }
}

#[test]
fn empty_aggregator_has_no_summary() -> TestResult {
    let aggregator = StatsAggregator::new();
    assert!(aggregator.is_empty());
    assert!(aggregator.summary().is_none());
    Ok(())
}

#[test]
fn summary_computes_min_max_avg_and_success_fraction() -> TestResult {
    let mut aggregator = StatsAggregator::new();
    aggregator.record(run("[01] 10 4", true, 5, 3));
    aggregator.record(run("0", false, 16, 7));
    aggregator.record(run("[2] 6 1", true, 3, 2));
    aggregator.record(run("0", false, 8, 4));

    let summary = aggregator.summary().ok_or("missing summary")?;
    assert_eq!(summary.searches, 4);
    assert_eq!(summary.successes, 2);
    assert!((summary.success_fraction - 50.0).abs() < f64::EPSILON);

    assert_eq!(summary.states.min, 3);
    assert_eq!(summary.states.max, 16);
    assert!((summary.states.avg - 8.0).abs() < f64::EPSILON);

    assert_eq!(summary.frontier_states.min, 2);
    assert_eq!(summary.frontier_states.max, 7);
    assert!((summary.frontier_states.avg - 4.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn recorded_runs_are_kept_in_order() -> TestResult {
    let mut aggregator = StatsAggregator::new();
    aggregator.record(run("[0] 4 2", true, 2, 1));
    aggregator.record(run("0", false, 9, 5));

    assert_eq!(aggregator.len(), 2);
    assert_eq!(aggregator.runs()[0].result, "[0] 4 2");
    assert_eq!(aggregator.runs()[1].result, "0");
    Ok(())
}
