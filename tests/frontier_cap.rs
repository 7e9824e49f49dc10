mod common;

use std::error::Error;

use plandag::run_instance;

use common::instance;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_frontier_hands_over_to_iterative_deepening() -> TestResult {
    // Cap of 1: BFS admits [0], then must stop the instant admitting [1]
    // would push the frontier to 2. Iterative deepening picks up the
    // unconsumed frontier and still finds [0, 1].
    let inst = instance(&[(0, 5, 2), (1, 5, 2)], &[], (10, 4), 1);
    let stats = run_instance(&inst);

    assert!(stats.success);
    assert_eq!(stats.result, "[01] 10 4");
    // Dedup set: {0} admitted by BFS, {0,1} admitted during deepening.
    // {1} was never admitted anywhere.
    assert_eq!(stats.number_of_frontier_states, 2);
    Ok(())
}

#[test]
fn generous_cap_keeps_the_search_in_bfs() -> TestResult {
    let inst = instance(&[(0, 5, 2), (1, 5, 2)], &[], (10, 4), 5);
    let stats = run_instance(&inst);

    assert!(stats.success);
    // BFS admits {0}, {1} and one of the two permutations of {0,1}.
    assert_eq!(stats.number_of_frontier_states, 3);
    Ok(())
}

#[test]
fn zero_cap_admits_nothing_and_fails_cleanly() -> TestResult {
    // With a cap of 0 the very first admission would exceed it, so BFS
    // hands an empty frontier to the deepening phase, which exhausts every
    // depth limit without a candidate.
    let inst = instance(&[(0, 5, 2), (1, 5, 2)], &[], (10, 4), 0);
    let stats = run_instance(&inst);

    assert!(!stats.success);
    assert_eq!(stats.result, "0");
    assert_eq!(stats.number_of_frontier_states, 0);
    Ok(())
}

#[test]
fn deepening_phase_reports_failure_for_unreachable_targets() -> TestResult {
    // Small cap forces the hand-over; the target stays unreachable either
    // way, and the run must end with the failure token, not a panic.
    let inst = instance(
        &[(0, 1, 1), (1, 1, 1), (2, 1, 1)],
        &[],
        (1000, 100),
        1,
    );
    let stats = run_instance(&inst);

    assert!(!stats.success);
    assert_eq!(stats.result, "0");
    Ok(())
}
