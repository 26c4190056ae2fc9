//! Dependency provisioning — installs the manifest's packages via pip.

use std::path::Path;

use crate::command_runner::CommandRunner;
use crate::error::BootstrapError;

/// How many trailing stderr lines survive into the diagnostic. Pip failures
/// end with the useful line; everything above is progress noise.
const STDERR_TAIL_LINES: usize = 8;

/// Install the packages listed in the manifest.
///
/// The manifest must exist before the installer is invoked — its absence is
/// a configuration error, not a transient condition. Installer stdout is
/// suppressed (`--quiet` plus piped output); stderr surfaces only in the
/// failure diagnostic. Re-running on an already-satisfied environment is a
/// no-op by the installer's own idempotence guarantee.
///
/// # Errors
///
/// Returns `ManifestMissing` when the manifest file does not exist and
/// `ProvisioningFailed` when the installer cannot be run or exits non-zero.
pub async fn provision(
    runner: &impl CommandRunner,
    interpreter: &str,
    manifest: &Path,
) -> Result<(), BootstrapError> {
    if !manifest.exists() {
        return Err(BootstrapError::ManifestMissing {
            path: manifest.to_path_buf(),
        });
    }

    let manifest_arg = manifest.to_string_lossy();
    let out = runner
        .run_unbounded(
            interpreter,
            &["-m", "pip", "install", "-r", &manifest_arg, "--quiet"],
        )
        .await
        .map_err(|e| BootstrapError::ProvisioningFailed {
            detail: e.to_string(),
        })?;

    if out.status.success() {
        Ok(())
    } else {
        let mut detail = stderr_tail(&out.stderr);
        if detail.is_empty() {
            detail = format!("installer returned {}", out.status);
        }
        Err(BootstrapError::ProvisioningFailed { detail })
    }
}

/// Last few non-empty stderr lines, joined for a one-block diagnostic.
fn stderr_tail(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let skip = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[skip..].join("\n")
}
