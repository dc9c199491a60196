use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Context;

use sshwrap::args::{classify, ParsedInvocation};
use sshwrap::config::{Config, WrapperPaths};
use sshwrap::logging::init_tracing;
use sshwrap::orchestrator::Orchestrator;
use sshwrap::runner::SystemRunner;

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let parsed = classify(&args);

    init_tracing(parsed.verbosity);

    match run(&args, parsed) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("sshwrap: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[OsString], parsed: ParsedInvocation) -> anyhow::Result<u8> {
    let config = Config::load().context("loading configuration")?;
    let paths = WrapperPaths::from_env(&config)?;

    let orchestrator = Orchestrator::new(config.clone(), paths, SystemRunner);
    let report = orchestrator.run_classified(args, parsed);

    Ok(report.exit_code(config.propagate_exit_status))
}
