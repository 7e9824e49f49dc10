// src/input/parser.rs

use std::fmt;
use std::str::FromStr;

use crate::dag::{Task, TaskId};
use crate::errors::{PlandagError, Result};
use crate::search::Goal;

/// One parsed problem instance: tasks, goal, frontier cap and precedence
/// pairs, exactly as the input grammar orders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub tasks: Vec<Task>,
    pub goal: Goal,
    pub max_frontier_size: usize,
    pub deps: Vec<(TaskId, TaskId)>,
}

impl fmt::Display for Instance {
    /// Render back to the input grammar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {} {}",
            self.tasks.len(),
            self.goal.value,
            self.goal.deadline,
            self.max_frontier_size
        )?;
        for task in &self.tasks {
            writeln!(f, "{} {} {}", task.id, task.value, task.time)?;
        }
        for (pred, succ) in &self.deps {
            writeln!(f, "{pred} {succ}")?;
        }
        Ok(())
    }
}

/// Parse one instance from whitespace-separated integer tokens.
///
/// Wrong token counts and non-numeric tokens are recoverable parse errors;
/// they abort this run only. Dependency pairs referencing unknown ids or
/// forming a cycle are *not* validated here — those are unchecked
/// preconditions of the search.
pub fn parse_instance(input: &str) -> Result<Instance> {
    let mut tokens = input.split_whitespace();

    let number_of_tasks: usize = next_int(&mut tokens, "numberOfTasks")?;
    let target_value: u32 = next_int(&mut tokens, "targetValue")?;
    let target_deadline: u32 = next_int(&mut tokens, "targetDeadline")?;
    let max_frontier_size: usize = next_int(&mut tokens, "maxFrontierSize")?;

    // The header count is untrusted input; missing task tokens surface as
    // parse errors below, so only the reserve needs bounding here.
    let mut tasks = Vec::with_capacity(number_of_tasks.min(1024));
    for i in 0..number_of_tasks {
        let id: TaskId = next_int(&mut tokens, &format!("taskId of task {i}"))?;
        let value: u32 = next_int(&mut tokens, &format!("value of task {i}"))?;
        let time: u32 = next_int(&mut tokens, &format!("time of task {i}"))?;
        tasks.push(Task::new(id, value, time));
    }

    let mut deps = Vec::new();
    while let Some(token) = tokens.next() {
        let pred: TaskId = parse_int(token, "predecessorId")?;
        let succ: TaskId = next_int(&mut tokens, "successorId")?;
        deps.push((pred, succ));
    }

    Ok(Instance {
        tasks,
        goal: Goal::new(target_value, target_deadline),
        max_frontier_size,
        deps,
    })
}

fn next_int<'a, T>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<T>
where
    T: FromStr,
{
    let token = tokens
        .next()
        .ok_or_else(|| PlandagError::Parse(format!("unexpected end of input, expected {what}")))?;
    parse_int(token, what)
}

fn parse_int<T>(token: &str, what: &str) -> Result<T>
where
    T: FromStr,
{
    token
        .parse()
        .map_err(|_| PlandagError::Parse(format!("invalid {what}: {token:?} is not a valid integer")))
}
