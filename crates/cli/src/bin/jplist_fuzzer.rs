use harness::TargetKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    parsefuzz::file_main(TargetKind::JsonPlist)
}
