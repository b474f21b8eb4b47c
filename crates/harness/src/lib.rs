//! Parse-and-discard harnesses that feed untrusted bytes to third-party
//! document loaders and drop whatever they return.
//!
//! Inputs come either from a bounded byte-source loop ([`stream`]) or from a
//! whole file ([`file`]). Every [`Target`] owns the full lifecycle of what the
//! loader allocates: contexts and documents are released by scope on every
//! path, including parse failures.

use tracing::trace;

pub mod file;
pub mod seeds;
pub mod stream;
pub mod targets;

pub use file::load_input;
pub use stream::{run_stream, LoopReport};
pub use targets::{BinaryPlist, JsonPlist, Outcome, Target, TargetKind, Yaml};

/// Largest input the streaming harness reads per iteration.
pub const MAX_INPUT_SIZE: usize = 4096;

/// Default number of inputs the streaming harness handles per process.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// In-process entry point for coverage-guided engines that own the corpus.
///
/// Always returns `0`. Setup failures and parse failures are not findings;
/// anything the loader does beyond returning is left for the engine to see.
///
/// # Example
///
/// ```
/// use harness::{test_one_input, JsonPlist};
/// assert_eq!(test_one_input(&JsonPlist, b"{\"a\": [1, 2]}"), 0);
/// assert_eq!(test_one_input(&JsonPlist, b"\xff\x00\x7f"), 0);
/// ```
pub fn test_one_input(target: &dyn Target, data: &[u8]) -> i32 {
    match target.exercise(data) {
        Ok(outcome) => trace!(harness = target.name(), len = data.len(), ?outcome, "input done"),
        Err(e) => trace!(harness = target.name(), len = data.len(), "setup failed: {e}"),
    }
    0
}

#[cfg(test)]
mod tests;
