pub mod config;
pub mod decision;
pub mod environment;
pub mod report;

pub use config::UpdaterConfig;
pub use decision::{ApplyStep, UpdateDecision};
pub use environment::Environment;
pub use report::{DecisionCounts, ReportEntry, RunMode, RunReport};
