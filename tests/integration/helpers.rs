//! Shared fixtures: a temp workspace and a stub `python3` on PATH.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp working directory plus a bin dir holding the stub interpreter.
pub struct StubEnv {
    pub dir: TempDir,
    pub bin: PathBuf,
}

/// Stand-in for `python3`: answers the version probe, records pip installs
/// and engine runs as marker files in the working directory, and exits with
/// codes taken from the environment.
const STUB_SCRIPT: &str = r#"#!/bin/sh
# the test pins the caller's PATH to the stub dir; restore one for touch/sleep
PATH="/usr/bin:/bin:$PATH"
export PATH
case "$1" in
  --version)
    echo "Python 3.12.1"
    exit 0
    ;;
  -m)
    touch pip_ran
    exit "${STUB_PIP_EXIT:-0}"
    ;;
  *)
    touch engine_ran
    if [ -n "$STUB_ENGINE_SLEEP" ]; then
      sleep "$STUB_ENGINE_SLEEP"
    fi
    exit "${STUB_ENGINE_EXIT:-0}"
    ;;
esac
"#;

/// Build a workspace with the stub interpreter installed.
pub fn stub_env() -> StubEnv {
    let dir = TempDir::new().expect("tempdir");
    let bin = dir.path().join("bin");
    std::fs::create_dir_all(&bin).expect("create bin dir");

    let stub = bin.join("python3");
    std::fs::write(&stub, STUB_SCRIPT).expect("write stub");
    let mut perms = std::fs::metadata(&stub).expect("stat stub").permissions();
    {
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(0o755);
    }
    std::fs::set_permissions(&stub, perms).expect("chmod stub");

    StubEnv { dir, bin }
}

/// Same workspace but with an empty bin dir — no interpreter anywhere.
pub fn empty_env() -> StubEnv {
    let env = stub_env();
    std::fs::remove_file(env.bin.join("python3")).expect("remove stub");
    env
}

impl StubEnv {
    /// Drop a manifest next to where the engine would live.
    pub fn write_manifest(&self) {
        std::fs::write(self.dir.path().join("requirements.txt"), "requests\n")
            .expect("write manifest");
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    pub fn has_dir(&self, name: &str) -> bool {
        self.dir.path().join(name).is_dir()
    }
}

/// The bootstrap binary, cwd'd into the workspace with PATH pinned to the
/// stub bin dir and all stub knobs cleared.
pub fn bootstrap(env: &StubEnv) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bootstrap"));
    cmd.current_dir(env.dir.path())
        .env("PATH", &env.bin)
        .env_remove("STUB_PIP_EXIT")
        .env_remove("STUB_ENGINE_EXIT")
        .env_remove("STUB_ENGINE_SLEEP")
        .env_remove("NO_COLOR")
        .env_remove("BOOTSTRAP_INTERPRETER")
        .env_remove("BOOTSTRAP_MANIFEST")
        .env_remove("BOOTSTRAP_ENGINE");
    cmd
}
