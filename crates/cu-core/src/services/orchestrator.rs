use crate::error::Result;
use crate::models::{Environment, RunMode, RunReport, UpdateDecision, UpdaterConfig};
use crate::services::applier;
use crate::services::detector::UpdateDetector;
use crate::services::runtime::{shell_quote, ContainerRuntime, ExecOutput};

/// Drives the per-environment pipeline over every running environment:
/// descriptor check, pull, detect, then apply or skip.
///
/// Environments are processed one at a time in enumeration order, and each
/// command is awaited before the next one is issued.
pub struct Orchestrator<R> {
    runtime: R,
    config: UpdaterConfig,
    detector: UpdateDetector,
    mode: RunMode,
}

impl<R: ContainerRuntime> Orchestrator<R> {
    pub fn new(runtime: R, config: UpdaterConfig, mode: RunMode) -> Result<Self> {
        let detector = UpdateDetector::new(config.update_markers.as_slice())?;
        Ok(Self {
            runtime,
            config,
            detector,
            mode,
        })
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Process every running environment once.
    ///
    /// Only a failure to enumerate environments is returned as an error;
    /// per-environment problems end up in the report.
    pub async fn run(&self) -> Result<RunReport> {
        let mut report = RunReport::new(self.mode);
        let environments = self.runtime.list_running().await?;

        if environments.is_empty() {
            tracing::info!("no running environments");
        } else {
            tracing::info!(count = environments.len(), "checking running environments");
        }
        if self.mode.is_simulate() {
            tracing::info!("[simulate] no changes will be made");
        }

        for environment in environments {
            let decision = self.process_environment(&environment).await;
            report.record(environment, decision);
        }

        report.finish();
        tracing::info!(
            elapsed_ms = report.elapsed().num_milliseconds(),
            "{}",
            report.summary_line()
        );
        Ok(report)
    }

    /// Run the pipeline for one environment and log its decision.
    pub async fn process_environment(&self, environment: &Environment) -> UpdateDecision {
        let decision = self.decide(environment).await;
        log_decision(environment, decision);
        decision
    }

    async fn decide(&self, environment: &Environment) -> UpdateDecision {
        if !self.has_descriptor(environment).await {
            return UpdateDecision::NoDescriptor;
        }

        if self.mode.is_simulate() {
            return UpdateDecision::SimulatedUpdate;
        }

        let pulled = self.pull(environment).await;
        match self.detector.matched_marker(&pulled.output) {
            Some(marker) => {
                tracing::debug!(environment = %environment, marker, "update marker found");
                applier::apply_update(&self.runtime, environment, &self.config).await
            }
            None => UpdateDecision::NoUpdateAvailable,
        }
    }

    async fn has_descriptor(&self, environment: &Environment) -> bool {
        let path = self.config.descriptor_path();
        let command = format!("test -f {}", shell_quote(&path.to_string_lossy()));
        match self.runtime.exec(environment, &command, None).await {
            Ok(output) => output.success(),
            Err(e) => {
                tracing::error!(environment = %environment, "descriptor check failed: {e}");
                false
            }
        }
    }

    /// Pull newer images. A failed pull yields whatever text was captured
    /// (possibly none), so it is classified exactly like "nothing new".
    async fn pull(&self, environment: &Environment) -> ExecOutput {
        let command = self.config.pull_command();
        tracing::info!(environment = %environment, "{command}");
        match self
            .runtime
            .exec(environment, &command, Some(&self.config.descriptor_dir))
            .await
        {
            Ok(output) => {
                if !output.success() {
                    tracing::warn!(
                        environment = %environment,
                        exit_code = output.exit_code,
                        "pull failed, treating as no update: {}",
                        output.output.trim()
                    );
                }
                output
            }
            Err(e) => {
                tracing::warn!(environment = %environment, "pull failed, treating as no update: {e}");
                ExecOutput::default()
            }
        }
    }
}

fn log_decision(environment: &Environment, decision: UpdateDecision) {
    match decision {
        UpdateDecision::NoDescriptor => {
            tracing::warn!(environment = %environment, "no compose descriptor, skipping")
        }
        UpdateDecision::NoUpdateAvailable => {
            tracing::info!(environment = %environment, "images up to date")
        }
        UpdateDecision::UpdateApplied => {
            tracing::info!(environment = %environment, "stack updated")
        }
        UpdateDecision::UpdateFailed { step } => {
            tracing::error!(environment = %environment, step = %step, "update failed")
        }
        UpdateDecision::SimulatedUpdate => {
            tracing::info!(environment = %environment, "[simulate] descriptor found, would pull and update")
        }
    }
}
