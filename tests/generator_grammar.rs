use std::error::Error;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use plandag::input::generator::generate_instance;
use plandag::input::parser::parse_instance;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn same_seed_reproduces_the_same_instance() -> TestResult {
    let mut a = ChaCha8Rng::seed_from_u64(7);
    let mut b = ChaCha8Rng::seed_from_u64(7);

    assert_eq!(
        generate_instance(10, 3, &mut a),
        generate_instance(10, 3, &mut b)
    );
    Ok(())
}

#[test]
fn generated_values_respect_generator_policy() -> TestResult {
    let n = 8;
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..50 {
        let instance = generate_instance(n, 10, &mut rng);

        assert_eq!(instance.tasks.len(), n);
        assert!((3..n).contains(&instance.max_frontier_size));
        for (expected_id, task) in instance.tasks.iter().enumerate() {
            assert_eq!(task.id, expected_id as i32);
            assert!((1..n as u32).contains(&task.value));
            assert!((1..n as u32).contains(&task.time));
        }
        for &(pred, succ) in &instance.deps {
            assert!((0..n as i32).contains(&pred));
            assert!((0..n as i32).contains(&succ));
            assert_ne!(pred, succ);
        }
    }
    Ok(())
}

#[test]
fn generated_dependency_pairs_are_acyclic() -> TestResult {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..50 {
        // High edge density to make an accidental cycle likely if the
        // permutation ordering were broken.
        let instance = generate_instance(12, 40, &mut rng);

        let mut graph: DiGraphMap<i32, ()> = DiGraphMap::new();
        for task in &instance.tasks {
            graph.add_node(task.id);
        }
        for &(pred, succ) in &instance.deps {
            graph.add_edge(pred, succ, ());
        }
        assert!(toposort(&graph, None).is_ok(), "cycle in {:?}", instance.deps);
    }
    Ok(())
}

#[test]
fn generated_instances_conform_to_the_input_grammar() -> TestResult {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..20 {
        let instance = generate_instance(6, 20, &mut rng);
        let reparsed = parse_instance(&instance.to_string())?;
        assert_eq!(instance, reparsed);
    }
    Ok(())
}
