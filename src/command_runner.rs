//! Child-process execution seam.
//!
//! All external commands (interpreter probe, installer, engine) go through
//! the `CommandRunner` trait so the orchestrator can be exercised in tests
//! with canned results instead of real processes.

use std::process::{ExitStatus, Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

/// Timeout for short probe commands (`python3 --version`).
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// How an inherited-stdio child finished.
#[derive(Debug)]
pub enum WaitOutcome {
    /// The child exited on its own (possibly signal-terminated).
    Exited(ExitStatus),
    /// The deadline fired first; the child was killed.
    TimedOut(Duration),
}

/// Generic command execution with piped or inherited stdio.
///
/// The production implementation uses tokio; test doubles return canned
/// results without spawning processes.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a command with piped output and the probe timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the process fails to spawn, cannot be waited on,
    /// or outlives the probe timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a command with piped output and no deadline. Used for the
    /// installer, whose runtime is unbounded by design.
    ///
    /// # Errors
    ///
    /// Returns an error if the process fails to spawn or cannot be waited on.
    async fn run_unbounded(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a command with inherited stdio (interactive pass-through) and an
    /// optional deadline. Operator interrupts reach the child directly
    /// through the shared terminal; the runner keeps waiting for the child
    /// to exit rather than abandoning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the process fails to spawn or cannot be waited on.
    /// A fired deadline is not an error; it is `WaitOutcome::TimedOut`.
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<WaitOutcome>;
}

/// Production `CommandRunner` backed by `tokio::process`.
pub struct TokioCommandRunner {
    probe_timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }

    async fn run_piped(program: &str, args: &[&str]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        // Drain stdout/stderr concurrently with wait(): a child writing more
        // than the OS pipe buffer would otherwise block forever.
        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stdout_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stderr_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
        );
        Ok(Output {
            status: status.with_context(|| format!("waiting for {program}"))?,
            stdout,
            stderr,
        })
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        tokio::select! {
            result = Self::run_piped(program, args) => result,
            () = tokio::time::sleep(self.probe_timeout) => {
                anyhow::bail!("{program} timed out after {}s", self.probe_timeout.as_secs())
            }
        }
    }

    async fn run_unbounded(&self, program: &str, args: &[&str]) -> Result<Output> {
        Self::run_piped(program, args).await
    }

    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<WaitOutcome> {
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args).kill_on_drop(true);
        // With a deadline the child leads its own process group so the whole
        // engine tree can be signalled on expiry. Without one it stays in
        // the terminal's foreground group and sees operator interrupts
        // directly.
        #[cfg(unix)]
        if timeout.is_some() {
            cmd.process_group(0);
        }
        let mut child = cmd
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        if let Some(deadline) = timeout {
            let expiry = tokio::time::sleep(deadline);
            tokio::pin!(expiry);
            loop {
                tokio::select! {
                    status = child.wait() => {
                        let status = status.with_context(|| format!("waiting for {program}"))?;
                        return Ok(WaitOutcome::Exited(status));
                    }
                    () = &mut expiry => {
                        // killing only the direct child would orphan any
                        // subprocess the engine spawned, still holding the
                        // inherited stdio
                        #[cfg(unix)]
                        signal_group(&child, nix::sys::signal::Signal::SIGKILL);
                        let _ = child.kill().await;
                        return Ok(WaitOutcome::TimedOut(deadline));
                    }
                    _ = tokio::signal::ctrl_c() => {
                        // the detached group does not see terminal
                        // interrupts; forward them so the engine can shut
                        // down before the deadline
                        #[cfg(unix)]
                        signal_group(&child, nix::sys::signal::Signal::SIGINT);
                    }
                }
            }
        } else {
            let status = loop {
                tokio::select! {
                    status = child.wait() => {
                        break status.with_context(|| format!("waiting for {program}"))?;
                    }
                    _ = tokio::signal::ctrl_c() => {
                        // The child shares the terminal's process group and
                        // received the same interrupt. Keep waiting so it can
                        // shut down and report its own status instead of
                        // being orphaned.
                    }
                }
            };
            Ok(WaitOutcome::Exited(status))
        }
    }
}

/// Signal the child's whole process group. The child was spawned as a group
/// leader, so its pid doubles as the pgid.
#[cfg(unix)]
fn signal_group(child: &tokio::process::Child, signal: nix::sys::signal::Signal) {
    use nix::sys::signal::killpg;
    use nix::unistd::Pid;

    let Some(pid) = child.id().and_then(|p| i32::try_from(p).ok()) else {
        return;
    };
    let _ = killpg(Pid::from_raw(pid), signal);
}
