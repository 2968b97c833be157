//! Provider schema extraction through the Terraform CLI.
//!
//! The provider is compiled into a throwaway build directory laid out as a
//! local plugin mirror:
//!
//! ```text
//! <build>/plugins/registry.terraform.io/hashicorp/<short>/0.0.1/<os>_<arch>/terraform-provider-<short>
//! <build>/provider.tf
//! ```
//!
//! `terraform init` is restricted to that directory, then
//! `terraform providers schema -json` reports the schema. The build directory
//! is removed when extraction returns, whether it succeeded or not.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::REGISTRY_NAMESPACE;
use crate::error::{DocsError, IoResultExt, Result};
use crate::path_template::provider_short_name;
use crate::progress::Progress;
use crate::schema::{ProviderSchema, ProviderSchemas};
use crate::toolchain::Toolchain;

const PLUGINS_DIR: &str = "plugins";
const PLUGIN_VERSION: &str = "0.0.1";
const PROVIDER_DECLARATION_FILE: &str = "provider.tf";
const BUILD_DIR_PREFIX: &str = "tfws";

/// Terraform platform name for the host, e.g. `linux_amd64`.
pub fn plugin_platform() -> String {
    let os = match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    };
    let arch = match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    };
    format!("{os}_{arch}")
}

/// Location of the compiled provider inside a plugin directory.
pub fn plugin_binary_path(plugins_dir: &Path, short_name: &str) -> PathBuf {
    let binary = format!(
        "terraform-provider-{short_name}{}",
        std::env::consts::EXE_SUFFIX
    );
    plugins_dir
        .join(REGISTRY_NAMESPACE)
        .join(short_name)
        .join(PLUGIN_VERSION)
        .join(plugin_platform())
        .join(binary)
}

/// Minimal configuration instantiating the provider with an empty block.
fn provider_declaration(short_name: &str) -> String {
    format!("\nprovider {short_name:?} {{\n}}\n")
}

/// Extracts a provider's schema by compiling it and asking Terraform for it.
pub struct SchemaExtractor<'a> {
    toolchain: &'a dyn Toolchain,
    progress: &'a dyn Progress,
}

impl fmt::Debug for SchemaExtractor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaExtractor").finish_non_exhaustive()
    }
}

impl<'a> SchemaExtractor<'a> {
    pub fn new(toolchain: &'a dyn Toolchain, progress: &'a dyn Progress) -> Self {
        Self {
            toolchain,
            progress,
        }
    }

    /// Compile `provider_name`, load it into Terraform, and return its schema.
    pub fn extract(&self, provider_name: &str) -> Result<ProviderSchema> {
        let short_name = provider_short_name(provider_name);

        let build_dir = tempfile::Builder::new()
            .prefix(BUILD_DIR_PREFIX)
            .tempdir()
            .with_path(std::env::temp_dir())?;
        tracing::debug!(build_dir = %build_dir.path().display(), "created plugin build directory");

        self.progress
            .report(&format!("compiling provider {:?}", short_name));
        let binary = plugin_binary_path(&build_dir.path().join(PLUGINS_DIR), short_name);
        if let Some(parent) = binary.parent() {
            std::fs::create_dir_all(parent).with_path(parent)?;
        }
        self.toolchain.compile_provider(short_name, &binary)?;

        let declaration = build_dir.path().join(PROVIDER_DECLARATION_FILE);
        std::fs::write(&declaration, provider_declaration(short_name)).with_path(&declaration)?;

        self.progress.report("initializing Terraform with local plugin");
        let plugin_dir_arg = format!("-plugin-dir=./{PLUGINS_DIR}");
        self.toolchain.run_terraform(
            build_dir.path(),
            &["init", "-get-plugins=false", "-get=false", &plugin_dir_arg],
        )?;

        self.progress.report("exporting schema from Terraform");
        let schema_json = self
            .toolchain
            .run_terraform(build_dir.path(), &["providers", "schema", "-json"])?;

        ProviderSchemas::from_json(&schema_json)?
            .into_provider(short_name, REGISTRY_NAMESPACE)
            .ok_or_else(|| DocsError::SchemaNotFound {
                provider: short_name.to_string(),
            })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeToolchain;
    use super::*;
    use crate::error::ErrorKind;
    use crate::progress::testing::RecordingProgress;
    use crate::schema::fixtures::WIDGET_SCHEMA_JSON;

    #[test]
    fn test_plugin_binary_path_layout() {
        let path = plugin_binary_path(Path::new("/build/plugins"), "widget");
        let expected = format!(
            "/build/plugins/registry.terraform.io/hashicorp/widget/0.0.1/{}/terraform-provider-widget{}",
            plugin_platform(),
            std::env::consts::EXE_SUFFIX
        );
        assert_eq!(path, PathBuf::from(expected));
    }

    #[test]
    fn test_plugin_platform_format() {
        let platform = plugin_platform();
        let (os, arch) = platform.split_once('_').unwrap();
        assert!(!os.is_empty());
        assert!(!arch.is_empty());
        assert_ne!(os, "macos");
        assert_ne!(arch, "x86_64");
    }

    #[test]
    fn test_provider_declaration() {
        assert_eq!(provider_declaration("widget"), "\nprovider \"widget\" {\n}\n");
    }

    #[test]
    fn test_extract_by_registry_key() {
        let toolchain = FakeToolchain::with_schema(WIDGET_SCHEMA_JSON);
        let progress = RecordingProgress::default();
        let extractor = SchemaExtractor::new(&toolchain, &progress);

        let schema = extractor.extract("terraform-provider-widget").unwrap();
        assert!(schema.resource_schemas.contains_key("widget_thing"));
        assert!(schema.data_source_schemas.contains_key("widget_lookup"));

        let compiled = toolchain.compiled.borrow();
        assert_eq!(compiled.len(), 1);
        assert!(compiled[0].ends_with(format!(
            "plugins/registry.terraform.io/hashicorp/widget/0.0.1/{}/terraform-provider-widget{}",
            plugin_platform(),
            std::env::consts::EXE_SUFFIX
        )));

        let calls = toolchain.terraform_calls.borrow();
        assert_eq!(
            calls[0],
            ["init", "-get-plugins=false", "-get=false", "-plugin-dir=./plugins"]
        );
        assert_eq!(calls[1], ["providers", "schema", "-json"]);
        assert_eq!(
            toolchain.declarations.borrow()[0],
            "\nprovider \"widget\" {\n}\n"
        );
        assert!(progress.contains("compiling provider \"widget\""));
    }

    #[test]
    fn test_extract_prefers_bare_short_name() {
        let json = r#"{
          "provider_schemas": {
            "registry.terraform.io/hashicorp/widget": { "resource_schemas": { "widget_qualified": {} } },
            "widget": { "resource_schemas": { "widget_bare": {} } }
          }
        }"#;
        let toolchain = FakeToolchain::with_schema(json);
        let progress = RecordingProgress::default();

        let schema = SchemaExtractor::new(&toolchain, &progress)
            .extract("terraform-provider-widget")
            .unwrap();
        assert!(schema.resource_schemas.contains_key("widget_bare"));
        assert!(!schema.resource_schemas.contains_key("widget_qualified"));
    }

    #[test]
    fn test_extract_missing_provider_is_not_found() {
        let toolchain = FakeToolchain::with_schema(WIDGET_SCHEMA_JSON);
        let progress = RecordingProgress::default();

        let err = SchemaExtractor::new(&toolchain, &progress)
            .extract("terraform-provider-gadget")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaNotFound);
        assert!(err.to_string().contains("gadget"));
    }

    #[test]
    fn test_compile_failure_stops_before_terraform() {
        let toolchain = FakeToolchain {
            fail_compile: true,
            ..FakeToolchain::with_schema(WIDGET_SCHEMA_JSON)
        };
        let progress = RecordingProgress::default();

        let err = SchemaExtractor::new(&toolchain, &progress)
            .extract("terraform-provider-widget")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Compile);
        assert!(toolchain.terraform_calls.borrow().is_empty());
    }

    #[test]
    fn test_unparseable_schema_output() {
        let toolchain = FakeToolchain::with_schema("not json");
        let progress = RecordingProgress::default();

        let err = SchemaExtractor::new(&toolchain, &progress)
            .extract("terraform-provider-widget")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HostTool);
    }
}
