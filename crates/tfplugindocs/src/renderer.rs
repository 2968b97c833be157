//! Static site rendering of the scratch workspace.
//!
//! The output directory is rebuilt from scratch on every run: it is removed,
//! recreated, and filled with a mirror of the workspace in which every `.tmpl`
//! file has been rendered (and lost its `.tmpl` suffix) and every other file
//! has been copied byte for byte.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tera::Context;

use crate::error::{IoResultExt, Result};
use crate::fs_util::{remove_dir_if_exists, tree_files};
use crate::progress::Progress;
use crate::template_engine::TemplateEngine;

const TEMPLATE_EXTENSION: &str = "tmpl";

/// What to do with a workspace file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Copy,
    Render,
}

/// Decide the action for a file from its name alone.
pub fn classify(path: &Path) -> FileAction {
    match path.extension() {
        Some(ext) if ext == TEMPLATE_EXTENSION => FileAction::Render,
        _ => FileAction::Copy,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub copied: usize,
    pub rendered: usize,
}

/// Renders a workspace into a static output tree.
pub struct SiteRenderer<'a> {
    engine: TemplateEngine,
    progress: &'a dyn Progress,
}

impl fmt::Debug for SiteRenderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteRenderer")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl<'a> SiteRenderer<'a> {
    /// `provider_dir` is where `tffile` / `codefile` look up example files.
    pub fn new(provider_dir: &Path, progress: &'a dyn Progress) -> Self {
        Self {
            engine: TemplateEngine::new(provider_dir),
            progress,
        }
    }

    /// Rebuild `output_root` from the files under `workspace_root`.
    pub fn render(&self, workspace_root: &Path, output_root: &Path) -> Result<RenderReport> {
        remove_dir_if_exists(output_root)?;
        fs::create_dir_all(output_root).with_path(output_root)?;

        let mut report = RenderReport::default();
        let context = Context::new();
        let mut written: HashSet<PathBuf> = HashSet::new();

        for file in tree_files(workspace_root)? {
            let mut target = output_root.join(&file.relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).with_path(parent)?;
            }

            match classify(&file.path) {
                FileAction::Copy => {
                    self.progress
                        .report(&format!("copying {:?}", file.relative));
                    fs::copy(&file.path, &target).with_path(&file.path)?;
                    report.copied += 1;
                }
                FileAction::Render => {
                    self.progress
                        .report(&format!("rendering {:?}", file.relative));
                    let body = fs::read_to_string(&file.path).with_path(&file.path)?;
                    let name = file.relative.to_string_lossy();
                    let rendered = self.engine.render_str(&name, &body, &context)?;

                    target.set_extension("");
                    fs::write(&target, rendered).with_path(&target)?;
                    report.rendered += 1;
                }
            }
            tracing::debug!(path = %target.display(), "wrote output file");

            if !written.insert(target.clone()) {
                let relative = target.strip_prefix(output_root).unwrap_or(&target);
                tracing::warn!(
                    path = %target.display(),
                    source = %file.relative.display(),
                    "output file written more than once"
                );
                self.progress.report(&format!(
                    "{:?} overwrote an earlier file at {:?}",
                    file.relative, relative
                ));
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::progress::testing::RecordingProgress;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(Path::new("docs/r/thing.html.markdown.tmpl")),
            FileAction::Render
        );
        assert_eq!(
            classify(Path::new("docs/index.html.markdown")),
            FileAction::Copy
        );
        assert_eq!(classify(Path::new("docs/tmpl")), FileAction::Copy);
        assert_eq!(classify(Path::new("logo.png")), FileAction::Copy);
    }

    #[test]
    fn test_render_mirrors_workspace() {
        let provider = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let site = output.path().join("website");

        write(workspace.path(), "docs/index.html.markdown", "# {{ not rendered }}");
        write(workspace.path(), "docs/r/thing.html.markdown.tmpl", "# {{ 1 + 1 }}");
        write(workspace.path(), "docs/img/logo.png", "\u{0}PNG");

        let progress = RecordingProgress::default();
        let report = SiteRenderer::new(provider.path(), &progress)
            .render(workspace.path(), &site)
            .unwrap();
        assert_eq!(report, RenderReport { copied: 2, rendered: 1 });

        assert_eq!(
            fs::read_to_string(site.join("docs/index.html.markdown")).unwrap(),
            "# {{ not rendered }}"
        );
        assert_eq!(
            fs::read_to_string(site.join("docs/r/thing.html.markdown")).unwrap(),
            "# 2"
        );
        assert!(!site.join("docs/r/thing.html.markdown.tmpl").exists());
        assert_eq!(fs::read(site.join("docs/img/logo.png")).unwrap(), b"\0PNG");
    }

    #[test]
    fn test_tffile_resolves_against_provider_dir() {
        let provider = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let site = provider.path().join("website");

        write(
            provider.path(),
            "examples/resources/thing/resource.tf",
            "resource \"widget_thing\" \"example\" {\n  name = \"x\"\n}\n",
        );
        write(
            workspace.path(),
            "docs/r/thing.html.markdown.tmpl",
            "## Example Usage\n\n{{ tffile(file=\"examples/resources/thing/resource.tf\") }}\n",
        );

        let progress = RecordingProgress::default();
        SiteRenderer::new(provider.path(), &progress)
            .render(workspace.path(), &site)
            .unwrap();

        let page = fs::read_to_string(site.join("docs/r/thing.html.markdown")).unwrap();
        assert_eq!(
            page,
            "## Example Usage\n\n```terraform\nresource \"widget_thing\" \"example\" {\n  name = \"x\"\n}\n```\n"
        );
    }

    #[test]
    fn test_raw_blocks_pass_through() {
        let provider = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let site = provider.path().join("website");

        write(
            workspace.path(),
            "docs/d/lookup.html.markdown.tmpl",
            "{% raw %}Uses {{ var }} syntax{% endraw %}\n",
        );

        let progress = RecordingProgress::default();
        SiteRenderer::new(provider.path(), &progress)
            .render(workspace.path(), &site)
            .unwrap();
        assert_eq!(
            fs::read_to_string(site.join("docs/d/lookup.html.markdown")).unwrap(),
            "Uses {{ var }} syntax\n"
        );
    }

    #[test]
    fn test_parse_failure_aborts() {
        let provider = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let site = provider.path().join("website");

        write(workspace.path(), "docs/r/broken.html.markdown.tmpl", "{% if %}");

        let progress = RecordingProgress::default();
        let err = SiteRenderer::new(provider.path(), &progress)
            .render(workspace.path(), &site)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Template);
        assert!(err.to_string().contains("broken.html.markdown.tmpl"));
    }

    #[test]
    fn test_missing_example_file_aborts() {
        let provider = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let site = provider.path().join("website");

        write(
            workspace.path(),
            "docs/r/thing.html.markdown.tmpl",
            "{{ tffile(file=\"examples/missing.tf\") }}",
        );

        let progress = RecordingProgress::default();
        let err = SiteRenderer::new(provider.path(), &progress)
            .render(workspace.path(), &site)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Template);
    }

    #[test]
    fn test_rendered_page_replaces_plain_page_with_same_name() {
        let provider = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let site = provider.path().join("website");

        write(workspace.path(), "docs/r/thing.html.markdown", "HAND WRITTEN");
        write(workspace.path(), "docs/r/thing.html.markdown.tmpl", "---\ngenerated");

        let progress = RecordingProgress::default();
        let report = SiteRenderer::new(provider.path(), &progress)
            .render(workspace.path(), &site)
            .unwrap();
        assert_eq!(report, RenderReport { copied: 1, rendered: 1 });
        assert_eq!(
            fs::read_to_string(site.join("docs/r/thing.html.markdown")).unwrap(),
            "---\ngenerated"
        );
        assert!(progress.contains("overwrote an earlier file"));
    }

    #[test]
    fn test_stale_output_is_removed() {
        let provider = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let site = provider.path().join("website");

        write(&site, "docs/r/removed.html.markdown", "stale");
        write(workspace.path(), "docs/r/thing.html.markdown", "fresh");

        let progress = RecordingProgress::default();
        SiteRenderer::new(provider.path(), &progress)
            .render(workspace.path(), &site)
            .unwrap();

        assert!(!site.join("docs/r/removed.html.markdown").exists());
        assert!(site.join("docs/r/thing.html.markdown").is_file());
    }

    #[test]
    fn test_empty_workspace_yields_empty_output() {
        let provider = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let site = provider.path().join("website");

        let progress = RecordingProgress::default();
        let report = SiteRenderer::new(provider.path(), &progress)
            .render(workspace.path(), &site)
            .unwrap();
        assert_eq!(report, RenderReport::default());
        assert!(site.is_dir());
        assert_eq!(fs::read_dir(&site).unwrap().count(), 0);
    }
}
