// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use phrasecheck::cli::{Cli, Command};
use phrasecheck::error::ExitCode;

mod cmd_check;
mod cmd_filetypes;
mod cmd_tokens;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "PHRASECHECK_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "phrasecheck=debug" } else { "phrasecheck=warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = cli.config.as_deref();
    match &cli.command {
        Command::Check(args) => cmd_check::run(args, config),
        Command::CheckDirectory(args) => cmd_check::run_directory(args, config),
        Command::Tokens(args) => cmd_tokens::run(args),
        Command::Mimetypes(args) => cmd_filetypes::run_mimetypes(args, config),
        Command::Filetypes(args) => cmd_filetypes::run_filetypes(args, config),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("phrasecheck: {err:#}");
            ExitCode::for_error(&err).into()
        }
    }
}
