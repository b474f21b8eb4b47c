use anyhow::Result;
use serde::Deserialize;
use serde_yaml::{Deserializer, Value};
use tracing::trace;

use super::{Outcome, Target};

/// Loads the first YAML document of a byte stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct Yaml;

/// Parser context bound to one input buffer.
///
/// Lives for a single iteration; dropping it releases the event stream
/// independently of any document it produced.
pub struct YamlParser<'input> {
    stream: Deserializer<'input>,
}

/// A loaded YAML document.
#[derive(Debug)]
pub struct YamlDocument {
    root: Value,
}

impl YamlDocument {
    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl<'input> YamlParser<'input> {
    /// Binds `input` (and exactly its length) as the parser's source.
    pub fn new(input: &'input [u8]) -> Self {
        Self {
            stream: Deserializer::from_slice(input),
        }
    }

    /// Loads the next document. An empty or comment-only stream still
    /// yields one document whose root is null; `Ok(None)` only follows once
    /// the stream's documents have been consumed.
    pub fn load(&mut self) -> Result<Option<YamlDocument>, serde_yaml::Error> {
        match self.stream.next() {
            Some(doc) => Value::deserialize(doc).map(|root| Some(YamlDocument { root })),
            None => Ok(None),
        }
    }
}

impl Target for Yaml {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn exercise(&self, data: &[u8]) -> Result<Outcome> {
        let mut parser = YamlParser::new(data);
        let document = parser.load();
        let outcome = Outcome::of(&document);
        if let Err(e) = &document {
            trace!("yaml load failed: {e}");
        }
        drop(document);
        drop(parser);
        Ok(outcome)
    }
}
