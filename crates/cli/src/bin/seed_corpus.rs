use clap::Parser;
use parsefuzz::args::SeedCli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = SeedCli::parse();
    parsefuzz::seeds_main(&cli.seed)
}
