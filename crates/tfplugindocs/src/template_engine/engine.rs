//! Tera engine with the documentation filters and functions registered.

use std::path::Path;

use tera::{Context, Tera};

use super::filters;
use super::functions::CodeFile;
use crate::error::{DocsError, IoResultExt, Result};

/// Template engine shared by document synthesis and site rendering.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create an engine whose file functions resolve paths against `base_dir`.
    pub fn new(base_dir: &Path) -> Self {
        let mut tera = Tera::default();
        // Output is markdown; nothing is HTML-escaped regardless of file name.
        tera.autoescape_on(Vec::new());

        tera.register_filter("prefixlines", filters::prefixlines);
        tera.register_function("tffile", CodeFile::terraform(base_dir.to_path_buf()));
        tera.register_function("codefile", CodeFile::new(base_dir.to_path_buf()));

        Self { tera }
    }

    /// Register a named template from a string.
    pub fn add_template(&mut self, name: &str, body: &str) -> Result<()> {
        self.tera
            .add_raw_template(name, body)
            .map_err(|e| DocsError::template(name, e))
    }

    /// Register a named template from a file on disk.
    pub fn add_template_file(&mut self, name: &str, path: &Path) -> Result<()> {
        let body = std::fs::read_to_string(path).with_path(path)?;
        self.add_template(name, &body)
    }

    /// Render a previously registered template.
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(name, context)
            .map_err(|e| DocsError::template(name, e))
    }

    /// Parse and render a one-off template body without keeping it registered.
    pub fn render_str(&self, name: &str, body: &str, context: &Context) -> Result<String> {
        // Clone so one-off templates see the registered filters and functions
        let mut inline = self.tera.clone();
        inline
            .add_raw_template(name, body)
            .map_err(|e| DocsError::template(name, e))?;
        inline
            .render(name, context)
            .map_err(|e| DocsError::template(name, e))
    }
}
