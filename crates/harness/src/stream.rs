//! Bounded read-and-exercise loop for persistent-mode fuzzing.
//!
//! Each iteration performs one `read` into a reusable buffer and hands only
//! the bytes just read to the target. The loop ends on end of input, on a read
//! error, or once the iteration budget is spent.

use std::io::{ErrorKind, Read};
use tracing::{debug, trace};

use crate::targets::{Outcome, Target};

/// Counters gathered over one run of [`run_stream`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    /// Inputs read from the source, including skipped ones.
    pub iterations: usize,
    pub loaded: usize,
    pub rejected: usize,
    /// Inputs dropped because the target's context could not be set up.
    pub skipped: usize,
    pub bytes: usize,
}

/// Feeds inputs read from `source` to `target` until input runs out or
/// `budget` inputs were handled.
///
/// `buf` bounds the size of a single input and is reused across iterations.
pub fn run_stream<R: Read>(
    target: &dyn Target,
    mut source: R,
    budget: usize,
    buf: &mut [u8],
) -> LoopReport {
    let mut report = LoopReport::default();
    while report.iterations < budget {
        let len = match source.read(buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("stopping on read error: {e}");
                break;
            }
        };
        report.iterations += 1;
        report.bytes += len;

        match target.exercise(&buf[..len]) {
            Ok(Outcome::Loaded) => report.loaded += 1,
            Ok(Outcome::Rejected) => report.rejected += 1,
            Err(e) => {
                report.skipped += 1;
                debug!(iteration = report.iterations, "skipping input: {e}");
                continue;
            }
        }
        trace!(iteration = report.iterations, len, "input done");
    }
    debug!(
        harness = target.name(),
        iterations = report.iterations,
        loaded = report.loaded,
        rejected = report.rejected,
        skipped = report.skipped,
        bytes = report.bytes,
        "stream finished"
    );
    report
}
