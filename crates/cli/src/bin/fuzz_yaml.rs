//! Persistent-mode YAML harness: one stdin read per input, no arguments.

use harness::TargetKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    parsefuzz::stream_main(TargetKind::Yaml)
}
