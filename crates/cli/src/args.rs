use clap::error::ErrorKind;
use clap::{Args as ClapArgs, Parser};
use harness::TargetKind;
use std::ffi::OsString;
use std::path::PathBuf;

fn parse_kind(s: &str) -> Result<TargetKind, String> {
    s.parse()
}

/// Arguments of the file-driven harnesses.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Load one input file with a property-list decoder and discard the result"
)]
pub struct FileArgs {
    /// Input file handed to the decoder in one piece
    pub file: PathBuf,
}

/// Arguments of `seed-corpus`.
#[derive(Parser, Debug)]
#[command(version, about = "Write a starting corpus for one of the harnesses")]
pub struct SeedCli {
    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(ClapArgs, Debug)]
pub struct SeedArgs {
    /// Target format: yaml, bplist or jplist
    #[arg(value_parser = parse_kind)]
    pub kind: TargetKind,
    /// Directory the seed files are written to
    pub dir: PathBuf,
}

/// Outcome of parsing a file harness command line.
#[derive(Debug)]
pub enum FileCommand {
    Run(FileArgs),
    /// Wrong argument count or unknown flag.
    Usage,
    /// `--help` or `--version` was requested.
    Info(clap::Error),
}

/// Parses `args` (program name first) without exiting the process.
pub fn parse_file_args<I, T>(args: I) -> FileCommand
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match FileArgs::try_parse_from(args) {
        Ok(args) => FileCommand::Run(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            FileCommand::Info(e)
        }
        Err(_) => FileCommand::Usage,
    }
}
