//! Loading of `.tfplugindocs.toml` into the generator configuration.
//!
//! Precedence, lowest to highest: built-in defaults, the config file,
//! command-line flags. Flags are applied by the command definitions in
//! `main.rs`.

pub(crate) mod loader;

pub(crate) use loader::load_generator_config;

/// Config file looked up in the provider directory.
pub(crate) const CONFIG_FILENAME: &str = ".tfplugindocs.toml";
