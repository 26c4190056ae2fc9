//! Bootstrap orchestration — the linear state machine over the four steps.
//!
//! Each step runs to completion before the next starts; the first failure
//! short-circuits everything after it. No state is shared between steps
//! beyond the read-only config and the once-written outcome.

pub mod launch;
pub mod provision;
pub mod scaffold;
pub mod validate;

use crate::command_runner::CommandRunner;
use crate::config::BootstrapConfig;
use crate::error::BootstrapError;

/// Progress events emitted at each phase transition.
///
/// Implemented by the terminal reporter in production and by recording fakes
/// in tests. The orchestrator never touches a presentation type directly.
pub trait ProgressReporter {
    /// A phase has started.
    fn step(&self, message: &str);
    /// A phase that hands the terminal to a child has started. Implementors
    /// must not leave an animated indicator running over child output.
    fn handoff(&self, message: &str);
    /// The whole sequence finished successfully.
    fn success(&self, message: &str);
}

/// Position in the bootstrap sequence. Advances strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Validated,
    Provisioned,
    Scaffolded,
    Launched,
}

impl Stage {
    /// The stage entered after this one's step succeeds.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Start => Self::Validated,
            Self::Validated => Self::Provisioned,
            Self::Provisioned => Self::Scaffolded,
            Self::Scaffolded | Self::Launched => Self::Launched,
        }
    }
}

/// Final aggregate state of the whole sequence. Written exactly once.
#[derive(Debug)]
pub enum BootstrapOutcome {
    /// Every step succeeded and the engine exited cleanly.
    Success,
    /// The first failing step's reason.
    Failed(BootstrapError),
}

/// Run the full bootstrap sequence: validate → provision → scaffold → launch.
pub async fn run_bootstrap(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    config: &BootstrapConfig,
) -> BootstrapOutcome {
    let mut stage = Stage::Start;
    loop {
        let step = match stage {
            Stage::Start => {
                reporter.step(&format!("Checking interpreter '{}'", config.interpreter));
                validate::validate(runner, &config.interpreter).await
            }
            Stage::Validated => {
                reporter.step(&format!(
                    "Installing dependencies from {}",
                    config.manifest.display()
                ));
                provision::provision(runner, &config.interpreter, &config.manifest).await
            }
            Stage::Provisioned => {
                reporter.step("Preparing workspace directories");
                scaffold::scaffold(&config.workspace_dirs())
            }
            Stage::Scaffolded => {
                reporter.handoff(&format!(
                    "Starting update engine ({})",
                    config.engine_entry.display()
                ));
                match launch::launch(runner, config).await {
                    Ok(result) if result.success() => Ok(()),
                    Ok(result) => Err(BootstrapError::EngineFailed {
                        detail: result.status.to_string(),
                        log_hint: config.log_hint(),
                    }),
                    Err(e) => Err(e),
                }
            }
            Stage::Launched => {
                reporter.success("Update engine exited cleanly");
                return BootstrapOutcome::Success;
            }
        };
        match step {
            Ok(()) => stage = stage.advance(),
            Err(err) => return BootstrapOutcome::Failed(err),
        }
    }
}
