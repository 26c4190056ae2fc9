//! Process launcher — runs the update engine and captures its exit status.

use std::process::ExitStatus;

use crate::command_runner::{CommandRunner, WaitOutcome};
use crate::config::BootstrapConfig;
use crate::error::BootstrapError;

/// Outcome of one engine invocation, consumed by the failure reporter.
#[derive(Debug)]
pub struct LaunchResult {
    /// The engine's raw exit status.
    pub status: ExitStatus,
}

impl LaunchResult {
    /// Whether the engine exited cleanly.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Start the update engine and block until it exits.
///
/// Child stdio is inherited — engine output passes through to the operator's
/// terminal unmodified, and an operator interrupt reaches the engine through
/// the shared terminal rather than being swallowed here. The engine's error
/// semantics are never interpreted; only its exit status is observed.
///
/// # Errors
///
/// Returns `EngineFailed` when the engine cannot be started at all and
/// `EngineTimedOut` when the optional deadline fires first. A non-zero exit
/// is not an error at this layer — it is reported through `LaunchResult`.
pub async fn launch(
    runner: &impl CommandRunner,
    config: &BootstrapConfig,
) -> Result<LaunchResult, BootstrapError> {
    let entry = config.engine_entry.to_string_lossy();
    let outcome = runner
        .run_status(&config.interpreter, &[&entry], config.engine_timeout)
        .await
        .map_err(|e| BootstrapError::EngineFailed {
            detail: e.to_string(),
            log_hint: config.log_hint(),
        })?;

    match outcome {
        WaitOutcome::Exited(status) => Ok(LaunchResult { status }),
        WaitOutcome::TimedOut(deadline) => Err(BootstrapError::EngineTimedOut {
            seconds: deadline.as_secs(),
            log_hint: config.log_hint(),
        }),
    }
}
