//! Documentation generator for Terraform providers.
//!
//! Compiles a provider, asks Terraform for its schema, fills in any missing
//! documentation sources with generated defaults, and renders the result into
//! a static website tree. Hand-authored documentation always takes precedence
//! over generated content.
//!
//! # Modules
//!
//! - [`path_template`]: path templates for documentation, example, and import files
//! - [`extractor`]: provider compilation and schema extraction via the Terraform CLI
//! - [`synthesizer`]: default documentation for resources and data sources lacking it
//! - [`renderer`]: static rendering of the scratch workspace into the website directory
//! - [`generator`]: the end-to-end pipeline
//!
//! Supporting modules: [`config`], [`error`], [`progress`], [`schema`],
//! [`schema_markdown`], [`template_engine`], [`toolchain`].

pub mod config;
pub mod error;
pub mod extractor;
mod fs_util;
pub mod generator;
pub mod path_template;
pub mod progress;
pub mod renderer;
pub mod schema;
pub mod schema_markdown;
pub mod synthesizer;
pub mod template_engine;
pub mod toolchain;

pub use config::{GeneratorConfig, KindConfig};
pub use error::{DocsError, ErrorKind, Result};
pub use extractor::SchemaExtractor;
pub use generator::{GenerateReport, Generator};
pub use path_template::PathTemplate;
pub use progress::{Progress, TracingProgress};
pub use renderer::{classify, FileAction, RenderReport, SiteRenderer};
pub use schema::ProviderSchema;
pub use synthesizer::{DocSynthesizer, SynthesisReport};
pub use toolchain::{ProcessToolchain, Toolchain};
