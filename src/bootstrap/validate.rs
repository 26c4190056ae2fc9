//! Environment validation — confirms the interpreter is present and runnable.

use crate::command_runner::CommandRunner;
use crate::error::BootstrapError;

/// Probe the interpreter with a version query.
///
/// No side effects beyond the probe itself. A spawn failure (not on PATH)
/// and a non-success exit are both treated as the prerequisite being absent.
///
/// # Errors
///
/// Returns `PrerequisiteMissing` when the interpreter cannot be located or
/// does not respond to `--version`. Fatal — never retried.
pub async fn validate(
    runner: &impl CommandRunner,
    interpreter: &str,
) -> Result<(), BootstrapError> {
    match runner.run(interpreter, &["--version"]).await {
        Ok(out) if out.status.success() => Ok(()),
        Ok(_) | Err(_) => Err(BootstrapError::PrerequisiteMissing {
            interpreter: interpreter.to_string(),
        }),
    }
}
