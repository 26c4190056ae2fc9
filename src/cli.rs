//! CLI argument parsing with clap derive.
//!
//! The bootstrap is a single no-subcommand entry point: invoked bare, it
//! runs the whole sequence against the current working directory. Flags only
//! tune output and the few paths the sequence touches.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::bootstrap::{self, BootstrapOutcome};
use crate::command_runner::{DEFAULT_PROBE_TIMEOUT, TokioCommandRunner};
use crate::config::{
    BootstrapConfig, DEFAULT_ENGINE_ENTRY, DEFAULT_INTERPRETER, DEFAULT_MANIFEST,
};
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Prepare the host environment and hand off to the update engine.
#[derive(Parser)]
#[command(name = "bootstrap", version)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Interpreter the engine runs on
    #[arg(long, env = "BOOTSTRAP_INTERPRETER", default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// Path to the dependency manifest
    #[arg(long, env = "BOOTSTRAP_MANIFEST", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Path to the update engine's entry point
    #[arg(long, env = "BOOTSTRAP_ENGINE", default_value = DEFAULT_ENGINE_ENTRY)]
    pub engine: PathBuf,

    /// Stop the update engine after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECONDS")]
    pub engine_timeout: Option<u64>,
}

impl Cli {
    /// Execute the bootstrap sequence.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error; the caller reports it and
    /// exits non-zero.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            interpreter,
            manifest,
            engine,
            engine_timeout,
        } = self;

        let ctx = OutputContext::new(no_color, quiet);
        let config = BootstrapConfig {
            interpreter,
            manifest,
            engine_entry: engine,
            root: PathBuf::from("."),
            engine_timeout: engine_timeout.map(Duration::from_secs),
        };
        let runner = TokioCommandRunner::new(DEFAULT_PROBE_TIMEOUT);
        let reporter = TerminalReporter::new(&ctx);

        match bootstrap::run_bootstrap(&runner, &reporter, &config).await {
            BootstrapOutcome::Success => Ok(()),
            BootstrapOutcome::Failed(err) => Err(err.into()),
        }
    }
}
