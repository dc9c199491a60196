//! Shared test utilities: a fake `$HOME` layout and a recording runner.

#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use sshwrap::config::{Config, WrapperPaths};
use sshwrap::hooks::HookPhase;
use sshwrap::runner::{ProcessSpec, Runner};
use tempfile::TempDir;

pub fn raw_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

/// Temporary home directory with an empty `.ssh` base.
pub struct FakeHome {
    pub dir: TempDir,
}

impl FakeHome {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join(".ssh")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> WrapperPaths {
        WrapperPaths::from_home(self.path(), &Config::default())
    }

    /// Install an executable hook script.
    pub fn hook(&self, phase: HookPhase, target: &str, body: &str) -> PathBuf {
        let dir = self.paths().hook_dir(phase);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(target);
        write_executable(&path, &format!("#!/bin/sh\n{}\n", body));
        path
    }

    /// Install an executable hook exactly as given, with no `#!` line added.
    pub fn raw_hook(&self, phase: HookPhase, target: &str, content: &str) -> PathBuf {
        let dir = self.paths().hook_dir(phase);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(target);
        write_executable(&path, content);
        path
    }

    /// Install a hook file without the execute bit.
    pub fn plain_hook(&self, phase: HookPhase, target: &str) -> PathBuf {
        let dir = self.paths().hook_dir(phase);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(target);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        path
    }

    pub fn secret(&self, target: &str, contents: &[u8]) -> PathBuf {
        let dir = self.paths().secret_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(target);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

/// Write a script file and make it executable.
pub fn write_executable(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// Records every spec instead of starting a process.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<ProcessSpec>>,
    /// Exit code returned for the composed shell command.
    pub command_exit: Option<i32>,
    /// Fail to start the composed shell command.
    pub fail_command: bool,
}

impl RecordingRunner {
    pub fn exiting(code: i32) -> Self {
        Self {
            command_exit: Some(code),
            ..Self::default()
        }
    }

    /// What each call started, in order: the hook path for hooks, the
    /// shell for the composed command.
    pub fn started(&self) -> Vec<OsString> {
        self.calls
            .borrow()
            .iter()
            .map(|s| match hook_script(s) {
                Some(path) => path.clone(),
                None => s.program.clone(),
            })
            .collect()
    }

    /// Hook scripts that were started, in order.
    pub fn hooks(&self) -> Vec<OsString> {
        self.calls.borrow().iter().filter_map(hook_script).cloned().collect()
    }

    /// The `-c` argument of the single command invocation.
    pub fn command_line(&self) -> String {
        let calls = self.calls.borrow();
        let shell = calls
            .iter()
            .find(|s| is_command(s))
            .expect("no shell invocation recorded");
        shell.args[1].to_string_lossy().into_owned()
    }

    pub fn command_env(&self) -> Vec<(OsString, OsString)> {
        let calls = self.calls.borrow();
        calls
            .iter()
            .find(|s| is_command(s))
            .map(|s| s.env.clone())
            .unwrap_or_default()
    }
}

/// `<shell> -c <line>`.
fn is_command(spec: &ProcessSpec) -> bool {
    spec.args.len() == 2 && spec.args[0] == "-c"
}

/// `<shell> -c '"$0"' <path>` carries the hook path last.
fn hook_script(spec: &ProcessSpec) -> Option<&OsString> {
    match spec.args.as_slice() {
        [c, _, path] if c == "-c" => Some(path),
        _ => None,
    }
}

impl Runner for RecordingRunner {
    fn run(&self, spec: &ProcessSpec) -> std::io::Result<Option<i32>> {
        self.calls.borrow_mut().push(spec.clone());
        let is_command = is_command(spec);
        if is_command && self.fail_command {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no shell"));
        }
        Ok(if is_command { self.command_exit } else { Some(0) })
    }
}
