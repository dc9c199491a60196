//! Process boundary: every child the wrapper starts goes through a [`Runner`].

use std::ffi::OsString;
use std::process::Command;

/// One blocking child invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// Applied to the child only.
    pub env: Vec<(OsString, OsString)>,
}

impl ProcessSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// `<shell> -c <line>`.
    pub fn shell(shell: &str, line: impl Into<OsString>) -> Self {
        let mut spec = Self::new(shell);
        spec.args = vec!["-c".into(), line.into()];
        spec
    }

    /// `<shell> -c '"$0"' <script>`.
    ///
    /// The path travels as `$0`, so it needs no quoting, and the shell
    /// falls back to interpreting files that have no `#!` line.
    pub fn script(shell: &str, script: impl Into<OsString>) -> Self {
        let mut spec = Self::new(shell);
        spec.args = vec!["-c".into(), "\"$0\"".into(), script.into()];
        spec
    }

    pub fn with_env(mut self, env: Vec<(OsString, OsString)>) -> Self {
        self.env = env;
        self
    }
}

// Env values may hold the password; print names only.
impl std::fmt::Debug for ProcessSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessSpec")
            .field("program", &self.program)
            .field("args", &self.args)
            .field(
                "env",
                &self.env.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Runs a child to completion.
pub trait Runner {
    /// Start `spec`, wait for it, and return its exit code
    /// (`None` when killed by a signal).
    fn run(&self, spec: &ProcessSpec) -> std::io::Result<Option<i32>>;
}

/// Real processes with inherited stdio. No timeout: a hung child blocks
/// the wrapper until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, spec: &ProcessSpec) -> std::io::Result<Option<i32>> {
        let status = Command::new(&spec.program)
            .args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k, v)))
            .status()?;
        Ok(status.code())
    }
}
