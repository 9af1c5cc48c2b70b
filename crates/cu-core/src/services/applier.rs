use crate::models::{ApplyStep, Environment, UpdateDecision, UpdaterConfig};
use crate::services::runtime::ContainerRuntime;

pub fn step_command(step: ApplyStep, config: &UpdaterConfig) -> String {
    match step {
        ApplyStep::Stop => config.down_command(),
        ApplyStep::Start => config.up_command(),
        ApplyStep::Prune => config.prune_command.clone(),
    }
}

/// Recreate the stack inside `environment` so freshly pulled images are used.
///
/// Runs stop, start and prune in that order and stops at the first step that
/// fails. Completed steps are not reversed: a failed start leaves the stack
/// down.
pub async fn apply_update<R>(
    runtime: &R,
    environment: &Environment,
    config: &UpdaterConfig,
) -> UpdateDecision
where
    R: ContainerRuntime + ?Sized,
{
    for step in ApplyStep::SEQUENCE {
        let command = step_command(step, config);
        tracing::info!(environment = %environment, step = %step, "{command}");

        match runtime
            .exec(environment, &command, Some(&config.descriptor_dir))
            .await
        {
            Ok(output) if output.success() => {}
            Ok(output) => {
                tracing::error!(
                    environment = %environment,
                    step = %step,
                    exit_code = output.exit_code,
                    "{step} failed: {}",
                    output.output.trim()
                );
                return UpdateDecision::UpdateFailed { step };
            }
            Err(e) => {
                tracing::error!(environment = %environment, step = %step, "{step} failed: {e}");
                return UpdateDecision::UpdateFailed { step };
            }
        }
    }
    UpdateDecision::UpdateApplied
}
