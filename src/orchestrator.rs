//! Ties the stages together:
//!
//! ```text
//! Start → Classified → [CredentialResolved] → PreHookRun → CommandRun → PostHookRun → Done
//! Start → Classified → CommandRun → Done            (no target)
//! ```
//!
//! Child failures never stop the pipeline; every stage after the first
//! always runs.

use std::ffi::OsString;

use tracing::{debug, error, info};

use crate::args::{classify, ArgAssembler, EnvSet, ParsedInvocation};
use crate::config::{Config, Credential, CredentialResolver, WrapperPaths};
use crate::hooks::{HookDispatcher, HookOutcome, HookPhase};
use crate::runner::{ProcessSpec, Runner};

/// States visited during one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Classified,
    CredentialResolved,
    PreHookRun,
    CommandRun,
    PostHookRun,
    Done,
}

/// Everything that happened during [`Orchestrator::run`].
#[derive(Debug, Clone)]
pub struct RunReport {
    pub parsed: ParsedInvocation,
    /// The composed command went through the password helper.
    pub credential_used: bool,
    pub pre: Option<HookOutcome>,
    pub post: Option<HookOutcome>,
    /// The composed command was started.
    pub command_started: bool,
    /// Exit code of the composed command (`None` if it did not start or was killed).
    pub command_exit: Option<i32>,
    pub stages: Vec<Stage>,
}

impl RunReport {
    /// Process exit code for the wrapper itself.
    ///
    /// Always 0 unless `propagate` is set, in which case the client's code
    /// is forwarded (1 when it has none).
    pub fn exit_code(&self, propagate: bool) -> u8 {
        if !propagate {
            return 0;
        }
        match self.command_exit {
            Some(code) => u8::try_from(code).unwrap_or(1),
            None => 1,
        }
    }
}

pub struct Orchestrator<R: Runner> {
    config: Config,
    hooks: HookDispatcher,
    credentials: CredentialResolver,
    runner: R,
}

impl<R: Runner> Orchestrator<R> {
    pub fn new(config: Config, paths: WrapperPaths, runner: R) -> Self {
        let credentials = CredentialResolver::new(paths.secret_dir());
        let hooks = HookDispatcher::new(paths, &config.shell);
        Self {
            config,
            hooks,
            credentials,
            runner,
        }
    }

    /// The runner every child went through; tests use it to inspect calls.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Classify `tokens`, run hooks around the composed command, and report.
    pub fn run(&self, tokens: &[OsString]) -> RunReport {
        self.run_classified(tokens, classify(tokens))
    }

    /// Like [`Orchestrator::run`], for callers that already classified
    /// `tokens` (the binary needs the verbosity before logging starts).
    pub fn run_classified(&self, tokens: &[OsString], parsed: ParsedInvocation) -> RunReport {
        let mut report = RunReport {
            parsed,
            credential_used: false,
            pre: None,
            post: None,
            command_started: false,
            command_exit: None,
            stages: vec![Stage::Start, Stage::Classified],
        };
        debug!(target_host = ?report.parsed.target, verbosity = report.parsed.verbosity, "classified");

        let Some(target) = report.parsed.target.clone() else {
            info!("no connection target found, forwarding unchanged");
            self.run_command(tokens, None, &mut report);
            report.stages.push(Stage::Done);
            return report;
        };

        let credential = self.credentials.resolve(&target);
        if credential.is_some() {
            report.stages.push(Stage::CredentialResolved);
        }

        report.pre = Some(self.hooks.run(&self.runner, HookPhase::Pre, &target));
        report.stages.push(Stage::PreHookRun);

        self.run_command(tokens, credential.as_ref(), &mut report);

        report.post = Some(self.hooks.run(&self.runner, HookPhase::Post, &target));
        report.stages.push(Stage::PostHookRun);

        report.stages.push(Stage::Done);
        report
    }

    fn run_command(
        &self,
        tokens: &[OsString],
        credential: Option<&Credential>,
        report: &mut RunReport,
    ) {
        let assembler = ArgAssembler::new(&self.config.client, tokens).with_password_helper(
            &self.config.password_helper,
            &self.config.password_helper_flag,
            credential,
        );
        let env = EnvSet::new().with_secret(&self.config.secret_env_var, credential);
        let line = assembler.build();
        info!(command = %line.to_string_lossy(), env = ?env, "running");

        let spec = ProcessSpec::shell(&self.config.shell, line).with_env(env.build());
        report.credential_used = assembler.uses_helper();
        match self.runner.run(&spec) {
            Ok(code) => {
                report.command_started = true;
                report.command_exit = code;
                debug!(exit_code = ?code, "command finished");
            }
            Err(e) => error!(shell = %self.config.shell, error = %e, "failed to run command"),
        }
        report.stages.push(Stage::CommandRun);
    }
}
