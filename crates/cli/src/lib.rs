//! Process entry points for the harnesses.
//! Binaries under `src/bin` are thin wrappers around the functions here.

use anyhow::Result;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use harness::{load_input, run_stream, test_one_input, LoopReport, Target, TargetKind};

pub mod args;
pub mod config;

use crate::args::{parse_file_args, FileCommand, SeedArgs};
use crate::config::{load_config, HarnessConfig};

/// Environment variable holding a log filter, e.g. `debug` or `harness=trace`.
pub const LOG_ENV: &str = "PARSEFUZZ_LOG";

/// Installs the stderr logger. `PARSEFUZZ_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn setup() -> Result<HarnessConfig> {
    let config = load_config()?;
    init_logging(&config.log_level);
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn fail(e: anyhow::Error) -> ExitCode {
    eprintln!("Error: {e:#}");
    ExitCode::from(1)
}

#[cfg(unix)]
fn raw_stdin() -> Result<Box<dyn Read>> {
    use anyhow::Context;
    use std::os::fd::AsFd;
    // Bypass the std buffer so one read never carries bytes into the next input.
    let fd = io::stdin()
        .as_fd()
        .try_clone_to_owned()
        .context("failed to duplicate stdin")?;
    Ok(Box::new(std::fs::File::from(fd)))
}

#[cfg(not(unix))]
fn raw_stdin() -> Result<Box<dyn Read>> {
    Ok(Box::new(io::stdin()))
}

/// Runs the persistent stdin loop for `kind` with the configured budget.
pub fn run_stdin(kind: TargetKind, config: &HarnessConfig) -> Result<LoopReport> {
    let source = raw_stdin()?;
    let mut buf = vec![0u8; config.max_input];
    Ok(run_stream(kind.target(), source, config.iterations, &mut buf))
}

/// Loads `path`, hands it to `target` and drops both document and buffer.
pub fn run_file(target: &dyn Target, path: &Path) -> Result<()> {
    let data = load_input(path)?;
    test_one_input(target, &data);
    drop(data);
    Ok(())
}

/// `main` of the streaming binaries.
pub fn stream_main(kind: TargetKind) -> ExitCode {
    let config = match setup() {
        Ok(config) => config,
        Err(e) => return fail(e),
    };
    match run_stdin(kind, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

/// `main` of the file-driven binaries: `<prog> <file>`.
pub fn file_main(kind: TargetKind) -> ExitCode {
    let argv: Vec<_> = std::env::args_os().collect();
    let args = match parse_file_args(argv.iter().cloned()) {
        FileCommand::Run(args) => args,
        FileCommand::Info(e) => e.exit(),
        FileCommand::Usage => {
            let prog = argv
                .first()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| kind.to_string());
            eprintln!("Usage: {prog} <file>");
            return ExitCode::from(1);
        }
    };
    if let Err(e) = setup() {
        return fail(e);
    }
    match run_file(kind.target(), &args.file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

/// Writes the seed corpus described by `args`.
pub fn run_seeds(args: &SeedArgs) -> Result<usize> {
    harness::seeds::write_corpus(&args.dir, args.kind)
}

/// `main` of `seed-corpus`.
pub fn seeds_main(args: &SeedArgs) -> ExitCode {
    if let Err(e) = setup() {
        return fail(e);
    }
    match run_seeds(args) {
        Ok(count) => {
            println!("{count} {} seeds written to {}", args.kind, args.dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}
