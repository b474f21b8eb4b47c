//! Loaders under test and the trait the harness drives them through.

use anyhow::Result;
use std::fmt;
use std::str::FromStr;

pub mod property_list;
pub mod yaml;

pub use self::property_list::{BinaryPlist, JsonPlist};
pub use self::yaml::{Yaml, YamlDocument, YamlParser};

/// What the loader made of one input.
///
/// Both variants release the same way; the distinction only feeds counters
/// and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loaded,
    Rejected,
}

impl Outcome {
    pub(crate) fn of<T, E>(res: &std::result::Result<T, E>) -> Self {
        if res.is_ok() {
            Outcome::Loaded
        } else {
            Outcome::Rejected
        }
    }
}

/// A single parse-and-discard entry point.
pub trait Target {
    /// Short identifier used in logs and file names.
    fn name(&self) -> &'static str;

    /// Hands `data` to the loader and drops everything it produced.
    ///
    /// # Errors
    ///
    /// Returns an error only when the harness could not prepare the loader's
    /// context. Parse failures are reported as [`Outcome::Rejected`].
    fn exercise(&self, data: &[u8]) -> Result<Outcome>;
}

/// Selects one of the bundled targets by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Yaml,
    BinaryPlist,
    JsonPlist,
}

impl TargetKind {
    pub const ALL: [TargetKind; 3] = [
        TargetKind::Yaml,
        TargetKind::BinaryPlist,
        TargetKind::JsonPlist,
    ];

    pub fn target(self) -> &'static dyn Target {
        match self {
            TargetKind::Yaml => &Yaml,
            TargetKind::BinaryPlist => &BinaryPlist,
            TargetKind::JsonPlist => &JsonPlist,
        }
    }

    /// File extension used for corpus files of this format.
    pub fn extension(self) -> &'static str {
        match self {
            TargetKind::Yaml => "yaml",
            TargetKind::BinaryPlist => "bplist",
            TargetKind::JsonPlist => "json",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target().name())
    }
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(TargetKind::Yaml),
            "bplist" | "binary-plist" => Ok(TargetKind::BinaryPlist),
            "jplist" | "json-plist" => Ok(TargetKind::JsonPlist),
            _ => Err(format!("unknown target `{s}` (expected yaml, bplist or jplist)")),
        }
    }
}
