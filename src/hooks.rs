//! Per-target lifecycle hooks.
//!
//! `<base>/pre.d/<target>` runs before the client, `<base>/post.d/<target>`
//! after it. Hooks run through the configured shell like `system(3)` would,
//! so scripts without a `#!` line work. They take no arguments, inherit
//! stdio, and their exit status is logged but otherwise ignored.

use std::ffi::{OsStr, OsString};
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{literal_join, WrapperPaths};
use crate::runner::{ProcessSpec, Runner};

/// When a hook fires relative to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    Pre,
    Post,
}

impl HookPhase {
    pub fn name(self) -> &'static str {
        match self {
            HookPhase::Pre => "pre",
            HookPhase::Post => "post",
        }
    }

    /// Directory name under the base dir.
    pub fn dir_name(self) -> &'static str {
        match self {
            HookPhase::Pre => "pre.d",
            HookPhase::Post => "post.d",
        }
    }
}

impl std::fmt::Display for HookPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened when a hook was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    pub phase: HookPhase,
    pub target: OsString,
    pub path: PathBuf,
    /// The hook was started and waited for.
    pub ran: bool,
    /// Exit code if it ran and exited normally.
    pub exit_code: Option<i32>,
}

/// Finds and runs hook executables.
#[derive(Debug, Clone)]
pub struct HookDispatcher {
    paths: WrapperPaths,
    shell: String,
}

impl HookDispatcher {
    pub fn new(paths: WrapperPaths, shell: &str) -> Self {
        Self {
            paths,
            shell: shell.to_string(),
        }
    }

    /// Hook location for `target`; the target is used as a literal path segment.
    pub fn path_for(&self, phase: HookPhase, target: impl AsRef<OsStr>) -> PathBuf {
        literal_join(&self.paths.hook_dir(phase), target)
    }

    /// Run the `phase` hook for `target` if one is installed.
    pub fn run(
        &self,
        runner: &dyn Runner,
        phase: HookPhase,
        target: impl AsRef<OsStr>,
    ) -> HookOutcome {
        let target = target.as_ref();
        let path = self.path_for(phase, target);
        let mut outcome = HookOutcome {
            phase,
            target: target.to_owned(),
            path: path.clone(),
            ran: false,
            exit_code: None,
        };

        let meta = match std::fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%phase, path = %path.display(), "no hook");
                return outcome;
            }
            Err(e) => {
                warn!(%phase, path = %path.display(), error = %e, "cannot inspect hook");
                return outcome;
            }
        };

        if !is_executable(&meta) {
            warn!(%phase, path = %path.display(), "hook exists but is not executable, skipping");
            return outcome;
        }

        info!(%phase, path = %path.display(), "running hook");
        match runner.run(&ProcessSpec::script(&self.shell, &path)) {
            Ok(code) => {
                outcome.ran = true;
                outcome.exit_code = code;
                debug!(%phase, exit_code = ?code, "hook finished");
            }
            Err(e) => {
                warn!(%phase, path = %path.display(), error = %e, "failed to start hook");
            }
        }
        outcome
    }
}

#[cfg(unix)]
fn is_executable(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.is_file() && meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(meta: &Metadata) -> bool {
    meta.is_file()
}
