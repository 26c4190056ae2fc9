//! Typed bootstrap failure taxonomy.
//!
//! Every variant is fatal: the orchestrator aborts remaining steps on the
//! first failure and never retries. The `Display` text is the operator-facing
//! diagnostic — it must name the failed check and, for engine failures, point
//! at the log artifact instead of repeating engine internals.

use std::path::PathBuf;

use thiserror::Error;

/// The reason a bootstrap run failed.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(
        "Interpreter '{interpreter}' not found or not runnable. \
         Install it and make sure it is on PATH."
    )]
    PrerequisiteMissing { interpreter: String },

    #[error("Dependency manifest not found: {path}")]
    ManifestMissing { path: PathBuf },

    #[error("Dependency installation failed: {detail}")]
    ProvisioningFailed { detail: String },

    #[error("Could not create workspace directory '{dir}': {source}")]
    ScaffoldFailed {
        dir: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Update engine failed ({detail}). See '{log_hint}/' for details.")]
    EngineFailed { detail: String, log_hint: String },

    #[error(
        "Update engine exceeded the {seconds}s timeout and was stopped. \
         See '{log_hint}/' for details."
    )]
    EngineTimedOut { seconds: u64, log_hint: String },
}
