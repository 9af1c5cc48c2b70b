use std::ffi::OsStr;
use std::io::IsTerminal;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Colors only for an interactive stdout, and never when `NO_COLOR` is set
/// to a non-empty value.
pub fn wants_ansi(stdout_is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    stdout_is_terminal && no_color.map_or(true, OsStr::is_empty)
}

/// Install the stdout log stream. Level comes from `RUST_LOG`, default `info`.
///
/// The returned guard flushes buffered lines on drop and must be held for the
/// whole program.
pub fn init() -> WorkerGuard {
    let stdout = std::io::stdout();
    let ansi = wants_ansi(
        stdout.is_terminal(),
        std::env::var_os("NO_COLOR").as_deref(),
    );
    let (writer, guard) = tracing_appender::non_blocking(stdout);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(ansi)
        .init();

    guard
}
