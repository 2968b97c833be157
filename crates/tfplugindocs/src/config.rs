//! Generator configuration.
//!
//! A single [`GeneratorConfig`] is built at startup (defaults, then the
//! `.tfplugindocs.toml` file, then command-line overrides) and borrowed by
//! every pipeline stage.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::path_template::PathTemplate;

/// Registry namespace used both for the local plugin directory layout and for
/// the fully-qualified provider key in the schema output.
pub const REGISTRY_NAMESPACE: &str = "registry.terraform.io/hashicorp";

fn default_terraform() -> PathBuf {
    PathBuf::from("terraform")
}

fn default_go() -> PathBuf {
    PathBuf::from("go")
}

fn default_provider_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_examples_dir() -> PathBuf {
    PathBuf::from("examples")
}

fn default_website_dir() -> PathBuf {
    PathBuf::from("website")
}

/// Path templates and optional document template override for one kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KindConfig {
    /// Documentation source path, relative to the scratch workspace.
    pub doc_path: PathTemplate,

    /// Example file path, relative to the examples directory.
    pub example_path: PathTemplate,

    /// Import example path, relative to the examples directory.
    #[serde(default)]
    pub import_path: Option<PathTemplate>,

    /// Tera template file replacing the built-in document template.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl KindConfig {
    pub fn resource() -> Self {
        Self {
            doc_path: PathTemplate::new("docs/r/{{ short_name }}.html.markdown.tmpl"),
            example_path: PathTemplate::new("resources/{{ short_name }}/resource.tf"),
            import_path: Some(PathTemplate::new("resources/{{ short_name }}/import.sh")),
            template: None,
        }
    }

    pub fn data_source() -> Self {
        Self {
            doc_path: PathTemplate::new("docs/d/{{ short_name }}.html.markdown.tmpl"),
            example_path: PathTemplate::new("datasources/{{ short_name }}/datasource.tf"),
            import_path: None,
            template: None,
        }
    }
}

/// Configuration for a full generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Provider name, e.g. `terraform-provider-widget`. Defaults to the base
    /// name of `provider_dir`.
    #[serde(default)]
    pub provider_name: Option<String>,

    /// Root of the provider source tree. Relative directories below resolve
    /// against it.
    #[serde(default = "default_provider_dir")]
    pub provider_dir: PathBuf,

    /// Terraform CLI binary.
    #[serde(default = "default_terraform")]
    pub terraform: PathBuf,

    /// Go toolchain binary used to compile the provider.
    #[serde(default = "default_go")]
    pub go: PathBuf,

    /// Hand-authored documentation sources, copied into the scratch workspace.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Root of the example files.
    #[serde(default = "default_examples_dir")]
    pub examples_dir: PathBuf,

    /// Rendered output, wiped and rebuilt on every run.
    #[serde(default = "default_website_dir")]
    pub website_dir: PathBuf,

    /// Reuse this scratch directory instead of a fresh temporary one.
    #[serde(default)]
    pub tmp_dir: Option<PathBuf>,

    #[serde(default = "KindConfig::resource")]
    pub resource: KindConfig,

    #[serde(default = "KindConfig::data_source")]
    pub data_source: KindConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider_name: None,
            provider_dir: default_provider_dir(),
            terraform: default_terraform(),
            go: default_go(),
            docs_dir: default_docs_dir(),
            examples_dir: default_examples_dir(),
            website_dir: default_website_dir(),
            tmp_dir: None,
            resource: KindConfig::resource(),
            data_source: KindConfig::data_source(),
        }
    }
}

impl GeneratorConfig {
    /// Config rooted at a provider source directory, everything else default.
    pub fn for_provider_dir(provider_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider_dir: provider_dir.into(),
            ..Self::default()
        }
    }

    /// Resolve a configured path against the provider directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.provider_dir.join(path)
        }
    }

    pub fn docs_path(&self) -> PathBuf {
        self.resolve(&self.docs_dir)
    }

    pub fn examples_path(&self) -> PathBuf {
        self.resolve(&self.examples_dir)
    }

    pub fn website_path(&self) -> PathBuf {
        self.resolve(&self.website_dir)
    }

    /// The configured provider name, or the base name of the provider directory.
    pub fn resolved_provider_name(&self) -> Option<String> {
        if let Some(name) = &self.provider_name {
            return Some(name.clone());
        }
        let dir = std::fs::canonicalize(&self.provider_dir)
            .unwrap_or_else(|_| self.provider_dir.clone());
        dir.file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}
