// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod search;
pub mod stats;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_and_validate};
use crate::config::model::ExperimentSection;
use crate::dag::{DependencyGraph, TaskRegistry};
use crate::input::generator::generate_instance;
use crate::input::parser::{Instance, parse_instance};
use crate::search::hybrid::HybridSearch;
use crate::search::tree::StateSpaceTree;
use crate::stats::{RunStats, StatsAggregator};

/// High-level entry point used by `main.rs`.
///
/// Two modes:
/// - `--input PATH`: parse one instance file, run one search, print its
///   report.
/// - otherwise: run an experiment batch of random instances per the config
///   file, aggregating and printing statistics per task count.
pub fn run(args: CliArgs) -> Result<()> {
    match &args.input {
        Some(path) => run_single(path),
        None => run_experiment(&args),
    }
}

/// Execute one full run on an instance: build the registry and DAG,
/// materialize the state-space tree, traverse it.
///
/// Runs are synchronous and execute to completion; every run ends with a
/// fully populated [`RunStats`], success or not.
pub fn run_instance(instance: &Instance) -> RunStats {
    let registry = TaskRegistry::from_tasks(instance.tasks.iter().copied());
    let graph = DependencyGraph::build(&registry, &instance.deps);
    let tree = StateSpaceTree::build(&registry, &graph, instance.goal.deadline);
    let search = HybridSearch::new(&registry, &tree, instance.goal, instance.max_frontier_size);
    search.run()
}

fn run_single(path: &str) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading instance file at {path:?}"))?;
    let instance = parse_instance(&contents)
        .with_context(|| format!("parsing instance file at {path:?}"))?;

    info!(
        tasks = instance.tasks.len(),
        deps = instance.deps.len(),
        "running single instance"
    );

    let stats = run_instance(&instance);
    print_run_block(0, &stats);
    Ok(())
}

fn run_experiment(args: &CliArgs) -> Result<()> {
    let experiment = load_experiment(args)?;
    let verbose = args.verbose || experiment.verbose;

    let mut rng = match args.seed.or(experiment.seed) {
        Some(seed) => {
            debug!(seed, "seeding generator RNG");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    for n in experiment.n_start..experiment.n_start + experiment.n_steps {
        println!("N = {n}");
        println!("===============================");

        // Fresh aggregator per task count; each trial gets a fresh search.
        let mut aggregator = StatsAggregator::new();
        for trial in 0..experiment.trials {
            let instance = generate_instance(n, experiment.edge_percent, &mut rng);
            let stats = run_instance(&instance);
            if verbose {
                print_run_block(trial, &stats);
            }
            aggregator.record(stats);
        }

        if let Some(summary) = aggregator.summary() {
            println!("{summary}");
        }
        println!("===============================");
    }

    Ok(())
}

/// Resolve the experiment section: load + validate the config file if it
/// exists, fall back to built-in defaults when the *default* path is absent.
/// A missing explicitly-given path is an error.
fn load_experiment(args: &CliArgs) -> Result<ExperimentSection> {
    let path = Path::new(&args.config);
    if !path.exists() && path == default_config_path() {
        info!("no Plandag.toml found; using built-in experiment defaults");
        return Ok(ExperimentSection::default());
    }

    let cfg = load_and_validate(path)
        .with_context(|| format!("loading experiment config from {:?}", args.config))?;
    Ok(cfg.experiment)
}

fn print_run_block(run: usize, stats: &RunStats) {
    println!("------------------------");
    println!("run {run}");
    println!("search output: {}", stats.result);
    println!("successful: {}", stats.success);
    println!("states in tree: {}", stats.number_of_states);
    println!("frontier states: {}", stats.number_of_frontier_states);
    println!("------------------------");
}
