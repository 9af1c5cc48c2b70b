//! Recording runtime used by the pipeline tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Result, UpdaterError};
use crate::models::Environment;
use crate::services::runtime::{ContainerRuntime, ExecOutput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub environment: String,
    pub command: String,
    pub working_directory: Option<PathBuf>,
}

enum Response {
    Exit(ExecOutput),
    Unreachable,
}

/// Unconfigured commands succeed with empty output.
pub(crate) struct FakeRuntime {
    environments: Option<Vec<Environment>>,
    responses: HashMap<(String, String), Response>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRuntime {
    pub fn with_environments(names: &[&str]) -> Self {
        Self {
            environments: Some(names.iter().map(|n| Environment::from(*n)).collect()),
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_enumeration() -> Self {
        Self {
            environments: None,
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(mut self, environment: &str, command: &str, exit_code: i32, output: &str) -> Self {
        self.responses.insert(
            (environment.to_string(), command.to_string()),
            Response::Exit(ExecOutput {
                output: output.to_string(),
                exit_code,
            }),
        );
        self
    }

    pub fn unreachable(mut self, environment: &str, command: &str) -> Self {
        self.responses.insert(
            (environment.to_string(), command.to_string()),
            Response::Unreachable,
        );
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands_for(&self, environment: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.environment == environment)
            .map(|c| c.command)
            .collect()
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn list_running(&self) -> Result<Vec<Environment>> {
        self.environments
            .clone()
            .ok_or_else(|| UpdaterError::Enumeration("docker daemon unavailable".into()))
    }

    async fn exec(
        &self,
        environment: &Environment,
        command: &str,
        working_directory: Option<&Path>,
    ) -> Result<ExecOutput> {
        self.calls.lock().unwrap().push(Call {
            environment: environment.name().to_string(),
            command: command.to_string(),
            working_directory: working_directory.map(Path::to_path_buf),
        });
        match self
            .responses
            .get(&(environment.name().to_string(), command.to_string()))
        {
            Some(Response::Exit(output)) => Ok(output.clone()),
            Some(Response::Unreachable) => Err(UpdaterError::Exec(format!(
                "container {environment} is not running"
            ))),
            None => Ok(ExecOutput::default()),
        }
    }
}

/// Collects formatted log lines emitted while its subscriber guard is alive.
#[derive(Clone, Default)]
pub(crate) struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Install a plain-text subscriber for the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let capture = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || capture.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buffer.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
