// src/input/generator.rs

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::dag::{Task, TaskId};
use crate::input::parser::Instance;
use crate::search::Goal;

/// Generate one random problem instance with `n` tasks.
///
/// Generator policy, matching the experiment setup this tool exists for:
/// - target value and deadline drawn uniformly from
///   `[round(n²(1 − 2/√n)/4), round(n²(1 + 2/√n)/4))`,
/// - frontier cap uniform in `[3, n)`,
/// - per-task value and time uniform in `[1, n)`,
/// - edges: over a random permutation P of the task ids, each ordered pair
///   `(P[i], P[j])` with `i < j` becomes a precedence pair with
///   `edge_percent`% probability. Ordering pairs along a permutation keeps
///   the result acyclic by construction.
///
/// Precondition: `n >= 4` (enforced by config validation).
pub fn generate_instance(n: usize, edge_percent: u32, rng: &mut ChaCha8Rng) -> Instance {
    let nf = n as f64;
    let lo = (nf * nf * (1.0 - 2.0 / nf.sqrt()) / 4.0).round() as u32;
    let hi = (nf * nf * (1.0 + 2.0 / nf.sqrt()) / 4.0).round() as u32;
    let hi = hi.max(lo + 1);

    let goal = Goal::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi));
    let max_frontier_size = rng.gen_range(3..n);

    let mut tasks = Vec::with_capacity(n);
    for id in 0..n as TaskId {
        let value = rng.gen_range(1..n as u32);
        let time = rng.gen_range(1..n as u32);
        tasks.push(Task::new(id, value, time));
    }

    let mut permutation: Vec<TaskId> = (0..n as TaskId).collect();
    permutation.shuffle(rng);

    let mut deps = Vec::new();
    for i in 0..n - 1 {
        for j in i + 1..n {
            if rng.gen_range(0..100u32) < edge_percent {
                deps.push((permutation[i], permutation[j]));
            }
        }
    }

    debug!(
        n,
        edges = deps.len(),
        target_value = goal.value,
        target_deadline = goal.deadline,
        max_frontier_size,
        "generated random instance"
    );

    Instance {
        tasks,
        goal,
        max_frontier_size,
        deps,
    }
}
