//! Config file discovery and loading.
//!
//! 1. `--config <FILE>`: read and parse errors are fatal.
//! 2. `<provider-dir>/.tfplugindocs.toml`: errors are logged and defaults used.

use std::path::Path;

use anyhow::Context;
use tfplugindocs::GeneratorConfig;

use super::CONFIG_FILENAME;

/// Load the generator config from `explicit`, or discover it in `search_dir`.
pub(crate) fn load_generator_config(
    explicit: Option<&Path>,
    search_dir: &Path,
) -> anyhow::Result<GeneratorConfig> {
    if let Some(path) = explicit {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        tracing::debug!(?path, "loaded config");
        return Ok(config);
    }

    let path = search_dir.join(CONFIG_FILENAME);
    if !path.is_file() {
        return Ok(GeneratorConfig::default());
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "loaded config");
                Ok(config)
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "failed to parse config, using defaults");
                Ok(GeneratorConfig::default())
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "failed to read config, using defaults");
            Ok(GeneratorConfig::default())
        }
    }
}
