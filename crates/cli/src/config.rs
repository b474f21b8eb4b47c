use anyhow::{bail, Context, Result};
use harness::{DEFAULT_ITERATIONS, MAX_INPUT_SIZE};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing_subscriber::EnvFilter;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "PARSEFUZZ_CONFIG";

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

fn default_max_input() -> usize {
    MAX_INPUT_SIZE
}

fn default_log_level() -> String {
    "warn".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Inputs handled by one streaming process before it exits.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Size of the streaming read buffer.
    #[serde(default = "default_max_input")]
    pub max_input: usize,
    /// Log filter used when `PARSEFUZZ_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            max_input: default_max_input(),
            log_level: default_log_level(),
        }
    }
}

impl HarnessConfig {
    fn validate(self) -> Result<Self> {
        if self.iterations == 0 {
            bail!("iterations must be greater than 0");
        }
        if self.max_input == 0 {
            bail!("max_input must be greater than 0");
        }
        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            bail!("invalid log_level `{}`: {e}", self.log_level);
        }
        Ok(self)
    }
}

/// Loads the file named by [`CONFIG_ENV`], or defaults when it is unset.
pub fn load_config() -> Result<HarnessConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => load_config_from(Path::new(&path)),
        None => Ok(HarnessConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<HarnessConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config: HarnessConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    config.validate()
}
