//! Tera-based template rendering for documentation sources.
//!
//! Two kinds of templates flow through this engine:
//!
//! - document templates, rendered by the synthesizer with a resource context
//!   to produce `.tmpl` documentation sources;
//! - site templates (`.tmpl` files), rendered by the site renderer with an
//!   empty context. These may call `tffile` / `codefile` to embed example
//!   files, resolved relative to the provider directory.

mod engine;
mod filters;
mod functions;

pub use engine::TemplateEngine;
