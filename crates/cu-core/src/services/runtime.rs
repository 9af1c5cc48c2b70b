use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Result, UpdaterError};
use crate::models::Environment;

/// Captured result of a command run inside an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// stdout followed by stderr.
    pub output: String,
    pub exit_code: i32,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The two primitives the pipeline needs from the container host.
///
/// A non-zero exit is returned as `Ok` with its `exit_code`; `Err` means the
/// command could not be run at all.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    async fn list_running(&self) -> Result<Vec<Environment>>;

    async fn exec(
        &self,
        environment: &Environment,
        command: &str,
        working_directory: Option<&Path>,
    ) -> Result<ExecOutput>;
}

/// Talks to the local Docker daemon through the `docker` CLI.
#[derive(Debug, Clone, Default)]
pub struct DockerRuntime;

impl DockerRuntime {
    pub fn new() -> Self {
        Self
    }
}

async fn run_docker(args: &[&str]) -> std::io::Result<std::process::Output> {
    Command::new("docker").args(args).output().await
}

/// Build the argument list for `docker exec`, wrapping the command in `sh -c`.
pub fn exec_args<'a>(
    environment: &'a str,
    command: &'a str,
    working_directory: Option<&'a str>,
) -> Vec<&'a str> {
    let mut args = vec!["exec"];
    if let Some(dir) = working_directory {
        args.push("-w");
        args.push(dir);
    }
    args.extend([environment, "sh", "-c", command]);
    args
}

/// Single-quote `value` for `sh -c`, escaping embedded single quotes.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Split `docker ps --format {{.Names}}` output into environment names.
pub fn parse_names(stdout: &str) -> Vec<Environment> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Environment::from)
        .collect()
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn list_running(&self) -> Result<Vec<Environment>> {
        let output = run_docker(&["ps", "--format", "{{.Names}}"])
            .await
            .map_err(|e| UpdaterError::Enumeration(format!("failed to run docker: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(UpdaterError::Enumeration(format!(
                "docker ps failed (exit {}): {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }
        Ok(parse_names(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn exec(
        &self,
        environment: &Environment,
        command: &str,
        working_directory: Option<&Path>,
    ) -> Result<ExecOutput> {
        let dir = working_directory.map(|d| d.to_string_lossy().into_owned());
        let args = exec_args(environment.name(), command, dir.as_deref());
        tracing::debug!(environment = %environment, command, "docker exec");

        let output = run_docker(&args).await.map_err(|e| {
            UpdaterError::Exec(format!("failed to run docker exec in {environment}: {e}"))
        })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(ExecOutput {
            output: text,
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
