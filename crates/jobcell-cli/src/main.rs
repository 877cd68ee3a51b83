//! jobcell CLI - print an OCI runtime config for the current CI job

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use jobcell_core::{output, Generator, GeneratorConfig, HostEnv, HostIdentity, Profile};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jobcell")]
#[command(author, version, about = "Generate an OCI config.json that isolates a CI job")]
struct Cli {
    /// Extra NAME=VALUE lines to append to the sandbox environment
    env_file: Option<PathBuf>,

    /// Generator profile: extended (tool-cache PATH, env file) or baseline
    #[arg(long, default_value_t = Profile::Extended)]
    profile: Profile,

    /// Log pipeline steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(&err),
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

// --help and --version succeed; every usage error is fatal like any other.
fn usage_exit(err: &clap::Error) -> ExitCode {
    // nothing useful to do if stderr itself is gone
    let _ = err.print();
    if err.exit_code() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "jobcell=debug,jobcell_core=debug"
    } else {
        "jobcell=warn,jobcell_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries only the document
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let host = HostEnv::from_process();
    let generator = Generator::new(GeneratorConfig::new(cli.profile));
    tracing::debug!(profile = %cli.profile, env_file = ?cli.env_file, "starting");

    generator.check_required(&host)?;
    let identity =
        HostIdentity::probe(&host, generator.config()).context("resolving host identity")?;
    let doc = generator.generate(&host, &identity, cli.env_file.as_deref())?;

    output::write_document(&doc, io::stdout().lock())?;
    Ok(())
}
