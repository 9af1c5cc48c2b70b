use chrono::{DateTime, Utc};

use super::decision::UpdateDecision;
use super::environment::Environment;

/// Whether mutating commands may be issued during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Apply,
    /// Read-only checks only; environments with a descriptor are reported
    /// as `SimulatedUpdate`.
    Simulate,
}

impl RunMode {
    pub fn is_simulate(self) -> bool {
        matches!(self, RunMode::Simulate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub environment: Environment,
    pub decision: UpdateDecision,
}

/// Per-decision tallies for the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionCounts {
    pub no_descriptor: usize,
    pub up_to_date: usize,
    pub applied: usize,
    pub failed: usize,
    pub simulated: usize,
}

impl DecisionCounts {
    pub fn total(&self) -> usize {
        self.no_descriptor + self.up_to_date + self.applied + self.failed + self.simulated
    }
}

/// Decisions for one invocation, in processing order.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mode: RunMode,
    pub entries: Vec<ReportEntry>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunReport {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record(&mut self, environment: Environment, decision: UpdateDecision) {
        self.entries.push(ReportEntry {
            environment,
            decision,
        });
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Decision recorded for `name`, if that environment was processed.
    pub fn decision_for(&self, name: &str) -> Option<UpdateDecision> {
        self.entries
            .iter()
            .find(|e| e.environment.name() == name)
            .map(|e| e.decision)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.decision.is_failure())
    }

    pub fn counts(&self) -> DecisionCounts {
        let mut counts = DecisionCounts::default();
        for entry in &self.entries {
            match entry.decision {
                UpdateDecision::NoDescriptor => counts.no_descriptor += 1,
                UpdateDecision::NoUpdateAvailable => counts.up_to_date += 1,
                UpdateDecision::UpdateApplied => counts.applied += 1,
                UpdateDecision::UpdateFailed { .. } => counts.failed += 1,
                UpdateDecision::SimulatedUpdate => counts.simulated += 1,
            }
        }
        counts
    }

    /// Wall-clock duration of the run; zero until `finish` is called.
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at
            .map(|end| end - self.started_at)
            .unwrap_or_else(chrono::Duration::zero)
    }

    pub fn summary_line(&self) -> String {
        let c = self.counts();
        let mut line = format!(
            "{} environment(s): {} updated, {} up to date, {} skipped, {} failed",
            c.total(),
            c.applied,
            c.up_to_date,
            c.no_descriptor,
            c.failed
        );
        if self.mode.is_simulate() {
            line.push_str(&format!(", {} would update", c.simulated));
        }
        line
    }
}
