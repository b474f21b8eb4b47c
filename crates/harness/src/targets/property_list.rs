use anyhow::{anyhow, Result};
use plist::Value;
use std::io::Cursor;
use tracing::trace;

use super::{Outcome, Target};

/// Header every binary property list starts with.
pub const BPLIST_MAGIC: &[u8] = b"bplist00";

/// Decodes binary (`bplist00`) property lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryPlist;

/// Decodes property lists written as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPlist;

/// Builds a property-list document from binary bytes.
///
/// Inputs without the binary header are rejected up front so the decoder's
/// format sniffing never routes them to the XML or ASCII readers.
pub fn from_bin(data: &[u8]) -> Result<Value> {
    if !data.starts_with(BPLIST_MAGIC) {
        return Err(anyhow!("missing binary plist header"));
    }
    Ok(Value::from_reader(Cursor::new(data))?)
}

/// Builds a property-list document from JSON bytes.
///
/// Objects become dictionaries in document order. `null` has no
/// property-list counterpart and fails the document.
pub fn from_json(data: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice::<Value>(data)?)
}

fn discard(name: &str, document: Result<Value>) -> Outcome {
    let outcome = Outcome::of(&document);
    if let Err(e) = &document {
        trace!("{name} load failed: {e}");
    }
    drop(document);
    outcome
}

impl Target for BinaryPlist {
    fn name(&self) -> &'static str {
        "bplist"
    }

    fn exercise(&self, data: &[u8]) -> Result<Outcome> {
        Ok(discard(self.name(), from_bin(data)))
    }
}

impl Target for JsonPlist {
    fn name(&self) -> &'static str {
        "jplist"
    }

    fn exercise(&self, data: &[u8]) -> Result<Outcome> {
        Ok(discard(self.name(), from_json(data)))
    }
}
