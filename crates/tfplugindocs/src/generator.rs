//! Pipeline orchestration.
//!
//! `generate` runs: init scratch workspace, copy existing docs in, extract the
//! schema, synthesize missing docs, render the static site. The scratch
//! workspace is removed on every exit path. Any stage failure stops the run
//! before later stages touch the filesystem, so a failed extraction leaves
//! the previous website untouched.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::GeneratorConfig;
use crate::error::{DocsError, IoResultExt, Result};
use crate::extractor::SchemaExtractor;
use crate::fs_util::{copy_dir, remove_dir_if_exists};
use crate::progress::Progress;
use crate::renderer::{RenderReport, SiteRenderer};
use crate::schema::ProviderSchema;
use crate::synthesizer::{DocSynthesizer, SynthesisReport};
use crate::toolchain::Toolchain;

const SCRATCH_PREFIX: &str = "tfws";
const WORKSPACE_DOCS_DIR: &str = "docs";

/// Scratch workspace that is deleted when dropped.
#[derive(Debug)]
enum ScratchDir {
    Temp(TempDir),
    Reused(PathBuf),
}

impl ScratchDir {
    /// A fresh temporary directory, or `reuse` wiped and recreated empty.
    fn create(reuse: Option<PathBuf>) -> Result<Self> {
        match reuse {
            Some(dir) => {
                remove_dir_if_exists(&dir)?;
                fs::create_dir_all(&dir).with_path(&dir)?;
                Ok(Self::Reused(dir))
            }
            None => tempfile::Builder::new()
                .prefix(SCRATCH_PREFIX)
                .tempdir()
                .map(Self::Temp)
                .with_path(std::env::temp_dir()),
        }
    }

    fn path(&self) -> &Path {
        match self {
            Self::Temp(dir) => dir.path(),
            Self::Reused(dir) => dir,
        }
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Self::Reused(dir) = self {
            if let Err(e) = fs::remove_dir_all(dir.as_path()) {
                tracing::warn!(path = %dir.display(), error = %e, "failed to remove scratch directory");
            }
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReport {
    pub synthesis: SynthesisReport,
    pub render: RenderReport,
}

/// Runs the documentation pipeline for one provider.
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    toolchain: &'a dyn Toolchain,
    progress: &'a dyn Progress,
}

impl fmt::Debug for Generator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> Generator<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        toolchain: &'a dyn Toolchain,
        progress: &'a dyn Progress,
    ) -> Self {
        Self {
            config,
            toolchain,
            progress,
        }
    }

    /// The configured provider name, or the provider directory's base name.
    pub fn provider_name(&self) -> Result<String> {
        self.config
            .resolved_provider_name()
            .ok_or_else(|| DocsError::ProviderName {
                dir: self.config.provider_dir.clone(),
            })
    }

    /// Run the full pipeline, rebuilding the website directory.
    pub fn generate(&self) -> Result<GenerateReport> {
        let provider_name = self.provider_name()?;
        self.progress
            .report(&format!("rendering website for provider {:?}", provider_name));

        let reuse = self.config.tmp_dir.as_deref().map(|dir| self.config.resolve(dir));
        let scratch = ScratchDir::create(reuse)?;
        tracing::debug!(workspace = %scratch.path().display(), "created scratch workspace");

        self.progress.report("copying any existing content to tmp dir");
        let copied = copy_dir(
            &self.config.docs_path(),
            &scratch.path().join(WORKSPACE_DOCS_DIR),
        )?;
        tracing::debug!(files = copied, "copied existing documentation");

        let schema = SchemaExtractor::new(self.toolchain, self.progress).extract(&provider_name)?;

        let synthesis = DocSynthesizer::new(self.config, scratch.path(), self.progress)?
            .synthesize(&provider_name, &schema)?;

        self.progress.report("rendering static website");
        let render = SiteRenderer::new(&self.config.provider_dir, self.progress)
            .render(scratch.path(), &self.config.website_path())?;

        Ok(GenerateReport { synthesis, render })
    }

    /// Extract the provider schema without generating anything.
    pub fn extract_schema(&self) -> Result<ProviderSchema> {
        let provider_name = self.provider_name()?;
        SchemaExtractor::new(self.toolchain, self.progress).extract(&provider_name)
    }
}
