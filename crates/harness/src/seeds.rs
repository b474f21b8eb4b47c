//! Starting corpus for each target.
//!
//! Valid seeds are produced by each format's own serializer from a few sample
//! documents, so they double as a round-trip check: serializer output must
//! load. Edge seeds are inputs a loader has to survive without any promise
//! about the result.

use anyhow::{Context, Result};
use serde_json::{json, Value as JsonValue};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::targets::TargetKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKind {
    /// Serializer output; the loader must accept it.
    Valid,
    /// Empty, truncated or garbage input.
    Edge,
}

#[derive(Debug, Clone)]
pub struct Seed {
    pub kind: SeedKind,
    pub data: Vec<u8>,
}

fn sample_documents() -> Vec<JsonValue> {
    vec![
        json!({
            "name": "harness",
            "count": 3,
            "ratio": 0.5,
            "enabled": true,
            "tags": ["a", "b"],
            "nested": { "depth": 1, "items": [{ "id": -7 }, { "id": 4294967296u64 }] }
        }),
        json!([]),
        json!({}),
        json!("scalar root"),
        json!([[[["deep"]]]]),
    ]
}

fn encode(kind: TargetKind, doc: &JsonValue) -> Result<Vec<u8>> {
    match kind {
        TargetKind::Yaml => Ok(serde_yaml::to_string(doc)?.into_bytes()),
        TargetKind::JsonPlist => Ok(serde_json::to_vec(doc)?),
        TargetKind::BinaryPlist => {
            let mut out = Vec::new();
            plist::to_writer_binary(&mut out, doc)?;
            Ok(out)
        }
    }
}

/// Builds the seeds for `kind`, valid ones first.
pub fn generate(kind: TargetKind) -> Result<Vec<Seed>> {
    let mut seeds = Vec::new();
    for doc in sample_documents() {
        let data = encode(kind, &doc).with_context(|| format!("failed to encode {kind} seed"))?;
        seeds.push(Seed {
            kind: SeedKind::Valid,
            data,
        });
    }
    if kind == TargetKind::Yaml {
        seeds.push(Seed {
            kind: SeedKind::Valid,
            data: b"base: &b { x: 1 }\nderived:\n  <<: *b\n  y: [2, 3]\n---\nsecond: doc\n".to_vec(),
        });
    }

    let truncated = seeds[0].data[..seeds[0].data.len() / 2].to_vec();
    for data in [Vec::new(), truncated, b"\xff\x00\x7f".to_vec()] {
        seeds.push(Seed {
            kind: SeedKind::Edge,
            data,
        });
    }
    debug!(target_kind = %kind, count = seeds.len(), "seeds generated");
    Ok(seeds)
}

/// Writes the seeds for `kind` into `dir` as `<kind>-<nn>.<ext>` and returns
/// how many files were written.
pub fn write_corpus(dir: &Path, kind: TargetKind) -> Result<usize> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let seeds = generate(kind)?;
    for (i, seed) in seeds.iter().enumerate() {
        let path = dir.join(format!("{kind}-{i:02}.{}", kind.extension()));
        fs::write(&path, &seed.data)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    info!(dir = %dir.display(), count = seeds.len(), "Seed corpus written");
    Ok(seeds.len())
}
