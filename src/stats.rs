// src/stats.rs

//! Per-run statistics and the batch aggregator.
//!
//! The aggregator has an explicit lifecycle: created once per experiment batch
//! by the caller, appended to by each run, read once by the reporting step.
//! The search core only ever produces [`RunStats`]; it never reads back.

use std::fmt;

/// Record of a single search run. All four fields are populated before the
/// run returns control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// `[<sequence>] <value> <time>` on success, the literal `0` on failure.
    pub result: String,
    pub success: bool,
    /// Vertex count of the state-space tree.
    pub number_of_states: usize,
    /// Size of the dedup set accumulated during traversal.
    pub number_of_frontier_states: usize,
}

/// Min/max/average of one counter across a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxAvg {
    pub min: usize,
    pub max: usize,
    pub avg: f64,
}

impl MinMaxAvg {
    fn over(values: impl Iterator<Item = usize> + Clone) -> Option<Self> {
        let count = values.clone().count();
        if count == 0 {
            return None;
        }
        let min = values.clone().min().unwrap_or(0);
        let max = values.clone().max().unwrap_or(0);
        let total: usize = values.sum();
        Some(Self {
            min,
            max,
            avg: total as f64 / count as f64,
        })
    }
}

impl fmt::Display for MinMaxAvg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.min, self.max, self.avg)
    }
}

/// Batch summary across all recorded runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub searches: usize,
    pub successes: usize,
    /// Fraction of successful searches, in percent.
    pub success_fraction: f64,
    pub states: MinMaxAvg,
    pub frontier_states: MinMaxAvg,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "successful searches: {}", self.successes)?;
        writeln!(f, "total searches:      {}", self.searches)?;
        writeln!(
            f,
            "success fraction:    {:.1}%",
            self.success_fraction
        )?;
        writeln!(
            f,
            "states in tree       (min | max | avg): {}",
            self.states
        )?;
        write!(
            f,
            "frontier states      (min | max | avg): {}",
            self.frontier_states
        )
    }
}

/// Collects one [`RunStats`] per run and summarizes them on demand.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    runs: Vec<RunStats>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stats: RunStats) {
        self.runs.push(stats);
    }

    pub fn runs(&self) -> &[RunStats] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Summarize the batch; `None` when nothing was recorded.
    pub fn summary(&self) -> Option<Summary> {
        if self.runs.is_empty() {
            return None;
        }

        let searches = self.runs.len();
        let successes = self.runs.iter().filter(|r| r.success).count();
        let states = MinMaxAvg::over(self.runs.iter().map(|r| r.number_of_states))?;
        let frontier_states =
            MinMaxAvg::over(self.runs.iter().map(|r| r.number_of_frontier_states))?;

        Some(Summary {
            searches,
            successes,
            success_fraction: successes as f64 / searches as f64 * 100.0,
            states,
            frontier_states,
        })
    }
}
