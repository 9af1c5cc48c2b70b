pub mod applier;
pub mod config_loader;
pub mod detector;
pub mod orchestrator;
pub mod runtime;

#[cfg(test)]
pub(crate) mod fake;

pub use detector::UpdateDetector;
pub use orchestrator::Orchestrator;
pub use runtime::{ContainerRuntime, DockerRuntime, ExecOutput};
