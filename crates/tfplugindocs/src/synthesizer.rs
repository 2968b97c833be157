//! Gap-filling synthesis of documentation sources.
//!
//! For every resource and data source in the schema, the synthesizer computes
//! the canonical documentation source path inside the scratch workspace. When
//! a hand-authored file already sits there it is left alone; otherwise a
//! default document is rendered and written in its place.
//!
//! Synthesized documents are themselves site templates: example files are
//! referenced through `tffile` / `codefile` calls that the site renderer
//! resolves, so the published page always embeds the current example.

use std::fmt;
use std::path::Path;

use tera::Context;

use crate::config::{GeneratorConfig, KindConfig};
use crate::error::{IoResultExt, Result};
use crate::path_template::{provider_short_name, resource_short_name, PathTemplate};
use crate::progress::Progress;
use crate::schema::{ProviderSchema, Schema};
use crate::schema_markdown::render_schema_markdown;
use crate::template_engine::TemplateEngine;

const RESOURCE_TEMPLATE_NAME: &str = "resource.md.tera";
const DATA_SOURCE_TEMPLATE_NAME: &str = "data-source.md.tera";

/// Built-in document template shared by resources and data sources.
pub const DEFAULT_DOC_TEMPLATE: &str = r#"---
layout: "{{ provider_short_name }}"
page_title: "{{ provider_short_name | title }}: {{ name }}"
sidebar_current: "docs-{{ provider_short_name }}-{{ kind_slug }}-{{ short_name }}"
description: |-
{{ description | prefixlines(prefix="  ") }}
---

# {{ name }} ({{ kind }})
{% if description %}
{{ description }}
{% endif %}
{%- if example_file %}
## Example Usage

{{ example_usage }}
{% endif %}
{{ schema_section }}{% if import_file %}
## Import

Import is supported using the following syntax:

{{ import_usage }}
{% endif %}"#;

/// Escape template delimiters so the site renderer emits the text unchanged.
///
/// Every `{{`, `{%` and `{#` opener becomes a string expression printing
/// itself. No raw block is involved, so text mentioning `{% endraw %}` is
/// escaped like any other tag.
pub fn protect_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some(&next @ ('{' | '%' | '#'))) => {
                chars.next();
                out.push_str("{{ \"{");
                out.push(next);
                out.push_str("\" }}");
            }
            _ => out.push(c),
        }
    }
    out
}

/// Counts of documents written and left untouched during one synthesis run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisReport {
    pub written: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy)]
enum DocKind {
    Resource,
    DataSource,
}

impl DocKind {
    fn label(self) -> &'static str {
        match self {
            DocKind::Resource => "Resource",
            DocKind::DataSource => "Data Source",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            DocKind::Resource => "resource",
            DocKind::DataSource => "datasource",
        }
    }

    fn template_name(self) -> &'static str {
        match self {
            DocKind::Resource => RESOURCE_TEMPLATE_NAME,
            DocKind::DataSource => DATA_SOURCE_TEMPLATE_NAME,
        }
    }

    fn paths(self, config: &GeneratorConfig) -> &KindConfig {
        match self {
            DocKind::Resource => &config.resource,
            DocKind::DataSource => &config.data_source,
        }
    }
}

/// Fills documentation gaps in a scratch workspace.
pub struct DocSynthesizer<'a> {
    config: &'a GeneratorConfig,
    workspace: &'a Path,
    engine: TemplateEngine,
    progress: &'a dyn Progress,
}

impl fmt::Debug for DocSynthesizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocSynthesizer")
            .field("workspace", &self.workspace)
            .finish_non_exhaustive()
    }
}

impl<'a> DocSynthesizer<'a> {
    /// Prepare the document templates (built-in or configured overrides).
    pub fn new(
        config: &'a GeneratorConfig,
        workspace: &'a Path,
        progress: &'a dyn Progress,
    ) -> Result<Self> {
        let mut engine = TemplateEngine::new(&config.provider_dir);
        for kind in [DocKind::Resource, DocKind::DataSource] {
            match &kind.paths(config).template {
                Some(path) => engine.add_template_file(kind.template_name(), &config.resolve(path))?,
                None => engine.add_template(kind.template_name(), DEFAULT_DOC_TEMPLATE)?,
            }
        }

        Ok(Self {
            config,
            workspace,
            engine,
            progress,
        })
    }

    /// Write default documents for every schema entry lacking one.
    pub fn synthesize(
        &self,
        provider_name: &str,
        schema: &ProviderSchema,
    ) -> Result<SynthesisReport> {
        let mut report = SynthesisReport::default();

        self.progress.report("generating missing resource content");
        for (name, entry) in &schema.resource_schemas {
            self.synthesize_entry(DocKind::Resource, provider_name, name, entry, &mut report)
                .map_err(|e| e.for_entry(name))?;
        }

        self.progress.report("generating missing data source content");
        for (name, entry) in &schema.data_source_schemas {
            self.synthesize_entry(DocKind::DataSource, provider_name, name, entry, &mut report)
                .map_err(|e| e.for_entry(name))?;
        }

        // Provider-level pages have no template set; hand-authored ones are
        // still carried over from the docs directory.
        self.progress
            .report("generating missing provider content: not supported, skipping");

        Ok(report)
    }

    fn synthesize_entry(
        &self,
        kind: DocKind,
        provider_name: &str,
        name: &str,
        schema: &Schema,
        report: &mut SynthesisReport,
    ) -> Result<()> {
        let paths = kind.paths(self.config);

        let doc_path = paths.doc_path.render(name, provider_name)?;
        if doc_path.is_empty() {
            self.progress
                .report(&format!("{} {:?} has no doc path, skipping", kind.slug(), name));
            return Ok(());
        }

        let target = self.workspace.join(&doc_path);
        if target.is_file() {
            self.progress
                .report(&format!("{} {:?} template exists, skipping", kind.slug(), name));
            report.skipped += 1;
            return Ok(());
        }

        let example_file = self.locate_artifact(&paths.example_path, name, provider_name)?;
        let import_file = match &paths.import_path {
            Some(template) => self.locate_artifact(template, name, provider_name)?,
            None => None,
        };

        self.progress
            .report(&format!("generating template for {:?}", name));
        let markdown = self.render_doc(
            kind,
            provider_name,
            name,
            example_file.as_deref(),
            import_file.as_deref(),
            schema,
        )?;

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).with_path(parent)?;
        }
        std::fs::write(&target, markdown).with_path(&target)?;
        tracing::debug!(path = %target.display(), "wrote documentation template");

        report.written += 1;
        Ok(())
    }

    /// Render an example path and keep it only if the file exists.
    ///
    /// Returns the path as referenced from documents: relative to the provider
    /// directory when the examples directory is relative.
    fn locate_artifact(
        &self,
        template: &PathTemplate,
        name: &str,
        provider_name: &str,
    ) -> Result<Option<String>> {
        let rendered = template.render(name, provider_name)?;
        if rendered.is_empty() {
            return Ok(None);
        }

        if !self.config.examples_path().join(&rendered).is_file() {
            return Ok(None);
        }
        let reference = self.config.examples_dir.join(&rendered);
        Ok(Some(reference.to_string_lossy().into_owned()))
    }

    fn render_doc(
        &self,
        kind: DocKind,
        provider_name: &str,
        name: &str,
        example_file: Option<&str>,
        import_file: Option<&str>,
        schema: &Schema,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("name", name);
        context.insert("short_name", resource_short_name(name, provider_name));
        context.insert("provider_name", provider_name);
        context.insert("provider_short_name", provider_short_name(provider_name));
        context.insert("kind", kind.label());
        context.insert("kind_slug", kind.slug());
        context.insert(
            "description",
            &protect_literal(schema.block.description.trim()),
        );
        context.insert("example_file", example_file.unwrap_or_default());
        context.insert("import_file", import_file.unwrap_or_default());
        context.insert(
            "example_usage",
            &example_file
                .map(|file| format!("{{{{ tffile(file=\"{file}\") }}}}"))
                .unwrap_or_default(),
        );
        context.insert(
            "import_usage",
            &import_file
                .map(|file| format!("{{{{ codefile(format=\"shell\", file=\"{file}\") }}}}"))
                .unwrap_or_default(),
        );
        context.insert(
            "schema_section",
            &protect_literal(&render_schema_markdown(&schema.block)),
        );

        self.engine.render(kind.template_name(), &context)
    }
}
