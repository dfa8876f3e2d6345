//! Search monitors enforcing the search budget.
//!
//! The solver notifies its monitor after every route construction and asks
//! it whether to continue. Budgets are polled, never preemptive: a running
//! construction always finishes.

use std::fmt;
use std::time::{Duration, Instant};

use super::SearchBudget;
use crate::error::ExhaustionReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(ExhaustionReason),
}

impl fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

pub trait SearchMonitor {
    fn name(&self) -> &str;
    fn on_enter_search(&mut self);
    /// Called once after each route construction.
    fn on_attempt(&mut self);
    fn search_command(&self) -> SearchCommand;
}

impl fmt::Debug for dyn SearchMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// Stops the search once a wall-clock limit has elapsed.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor {
    time_limit: Duration,
    start_time: Instant,
}

impl TimeLimitMonitor {
    pub fn new(time_limit: Duration) -> Self {
        Self {
            time_limit,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl SearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self) {
        self.start_time = Instant::now();
    }

    fn on_attempt(&mut self) {}

    fn search_command(&self) -> SearchCommand {
        if self.start_time.elapsed() >= self.time_limit {
            return SearchCommand::Terminate(ExhaustionReason::TimeLimit);
        }
        SearchCommand::Continue
    }
}

/// Stops the search after a fixed number of route constructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptLimitMonitor {
    max_attempts: u64,
    attempts: u64,
}

impl AttemptLimitMonitor {
    pub fn new(max_attempts: u64) -> Self {
        Self {
            max_attempts,
            attempts: 0,
        }
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}

impl SearchMonitor for AttemptLimitMonitor {
    fn name(&self) -> &str {
        "AttemptLimitMonitor"
    }

    fn on_enter_search(&mut self) {
        self.attempts = 0;
    }

    fn on_attempt(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
    }

    fn search_command(&self) -> SearchCommand {
        if self.attempts >= self.max_attempts {
            return SearchCommand::Terminate(ExhaustionReason::AttemptLimit);
        }
        SearchCommand::Continue
    }
}

/// Forwards every event to its children; the first child asking to
/// terminate wins.
#[derive(Debug, Default)]
pub struct CompositeMonitor {
    monitors: Vec<Box<dyn SearchMonitor>>,
}

impl CompositeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monitors for the limits set in `budget`.
    pub fn from_budget(budget: &SearchBudget) -> Self {
        let mut composite = Self::new();
        composite.add(TimeLimitMonitor::new(budget.time_limit()));
        if let Some(max) = budget.max_attempts {
            composite.add(AttemptLimitMonitor::new(max));
        }
        composite
    }

    pub fn add<M: SearchMonitor + 'static>(&mut self, monitor: M) {
        self.monitors.push(Box::new(monitor));
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl SearchMonitor for CompositeMonitor {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self) {
        self.monitors.iter_mut().for_each(|m| m.on_enter_search());
    }

    fn on_attempt(&mut self) {
        self.monitors.iter_mut().for_each(|m| m.on_attempt());
    }

    fn search_command(&self) -> SearchCommand {
        self.monitors
            .iter()
            .map(|m| m.search_command())
            .find(|c| *c != SearchCommand::Continue)
            .unwrap_or_default()
    }
}
