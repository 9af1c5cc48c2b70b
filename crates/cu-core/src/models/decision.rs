use std::fmt;

/// One step of applying an update, in the order it must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplyStep {
    Stop,
    Start,
    Prune,
}

impl ApplyStep {
    /// Stop before start avoids port and name collisions; prune last so the
    /// images still referenced by the old containers are not removed early.
    pub const SEQUENCE: [ApplyStep; 3] = [ApplyStep::Stop, ApplyStep::Start, ApplyStep::Prune];

    pub fn name(self) -> &'static str {
        match self {
            ApplyStep::Stop => "stop",
            ApplyStep::Start => "start",
            ApplyStep::Prune => "prune",
        }
    }
}

impl fmt::Display for ApplyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terminal outcome of one environment's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDecision {
    /// The environment has no compose descriptor at the configured path.
    NoDescriptor,
    NoUpdateAvailable,
    UpdateApplied,
    UpdateFailed { step: ApplyStep },
    /// Simulate mode: the descriptor exists and nothing was touched.
    SimulatedUpdate,
}

impl UpdateDecision {
    pub fn is_failure(&self) -> bool {
        matches!(self, UpdateDecision::UpdateFailed { .. })
    }

    /// Short human-readable label used in logs and the rendered report.
    pub fn label(&self) -> String {
        match self {
            UpdateDecision::NoDescriptor => "skipped (no descriptor)".to_string(),
            UpdateDecision::NoUpdateAvailable => "up to date".to_string(),
            UpdateDecision::UpdateApplied => "updated".to_string(),
            UpdateDecision::UpdateFailed { step } => format!("failed at {step}"),
            UpdateDecision::SimulatedUpdate => "would update (simulated)".to_string(),
        }
    }
}

impl fmt::Display for UpdateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
