//! Bootstrap configuration — interpreter, manifest, engine entry point,
//! and the workspace directories the engine expects to exist.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// The runtime the engine needs on the search path.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Declarative list of packages the engine depends on.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// The update engine's entry point, launched with the interpreter.
pub const DEFAULT_ENGINE_ENTRY: &str = "main.py";

/// Directories scaffolded before hand-off. The engine writes its log
/// artifact under the first one.
pub const WORKSPACE_DIRS: [&str; 3] = ["logs", "data", "templates"];

/// Resolved settings for one bootstrap run. Built once from CLI flags and
/// passed by shared reference — never mutated between steps.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Interpreter executable, looked up on PATH.
    pub interpreter: String,
    /// Path to the dependency manifest.
    pub manifest: PathBuf,
    /// Path to the update engine's entry point.
    pub engine_entry: PathBuf,
    /// Base directory for workspace scaffolding (the working directory).
    pub root: PathBuf,
    /// Optional deadline for the engine run. `None` means wait indefinitely,
    /// matching the original behaviour.
    pub engine_timeout: Option<Duration>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            engine_entry: PathBuf::from(DEFAULT_ENGINE_ENTRY),
            root: PathBuf::from("."),
            engine_timeout: None,
        }
    }
}

impl BootstrapConfig {
    /// Absolute or root-relative paths of the directories to scaffold.
    #[must_use]
    pub fn workspace_dirs(&self) -> Vec<PathBuf> {
        WORKSPACE_DIRS.iter().map(|d| self.root.join(d)).collect()
    }

    /// Where the operator is pointed for diagnostics on engine failure.
    /// The engine owns the log format; the bootstrap only references the
    /// directory it scaffolded for it.
    #[must_use]
    pub fn log_hint(&self) -> String {
        WORKSPACE_DIRS[0].to_string()
    }

    /// Convenience for tests: a config rooted at `root` with the manifest
    /// expected inside it.
    #[must_use]
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            manifest: root.join(DEFAULT_MANIFEST),
            engine_entry: root.join(DEFAULT_ENGINE_ENTRY),
            root: root.to_path_buf(),
            ..Self::default()
        }
    }
}
