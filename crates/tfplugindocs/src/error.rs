//! Error types for the documentation pipeline.
//!
//! Every failure aborts the run. Layers add context (provider, entry name,
//! file path) by wrapping, and [`DocsError::kind`] reports the category of the
//! underlying failure regardless of how many context layers sit on top of it.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Pipeline result type.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Errors raised while extracting, synthesizing, or rendering documentation.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("failed to compile provider '{provider}':\n{output}")]
    Compile { provider: String, output: String },

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed:\n{output}")]
    HostTool { command: String, output: String },

    #[error("unable to parse provider schema JSON: {source}")]
    SchemaParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to determine provider name from directory '{}'", dir.display())]
    ProviderName { dir: PathBuf },

    #[error("unable to find schema in JSON for provider '{provider}'")]
    SchemaNotFound { provider: String },

    #[error("template error in '{template}': {source}")]
    Template {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to render doc '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: Box<DocsError>,
    },
}

/// Failure category, independent of the context wrapped around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Compile,
    HostTool,
    SchemaNotFound,
    Template,
    FileIo,
}

impl DocsError {
    /// Create an I/O error annotated with the path being operated on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a template error for the named template.
    pub fn template(template: impl Into<String>, source: tera::Error) -> Self {
        Self::Template {
            template: template.into(),
            source,
        }
    }

    /// Wrap this error with the resource or data source it occurred for.
    pub fn for_entry(self, name: impl Into<String>) -> Self {
        Self::Entry {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// The category of the innermost failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProviderName { .. } => ErrorKind::Config,
            Self::Compile { .. } => ErrorKind::Compile,
            Self::Spawn { .. } | Self::HostTool { .. } | Self::SchemaParse { .. } => {
                ErrorKind::HostTool
            }
            Self::SchemaNotFound { .. } => ErrorKind::SchemaNotFound,
            Self::Template { .. } => ErrorKind::Template,
            Self::Io { .. } => ErrorKind::FileIo,
            Self::Entry { source, .. } => source.kind(),
        }
    }
}

/// Attach a path to `std::io::Result` values.
pub(crate) trait IoResultExt<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| DocsError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wrapper_keeps_kind() {
        let err = DocsError::SchemaNotFound {
            provider: "widget".to_string(),
        }
        .for_entry("widget_thing")
        .for_entry("outer");
        assert_eq!(err.kind(), ErrorKind::SchemaNotFound);
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = DocsError::io(
            "docs/r/thing.html.markdown.tmpl",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("docs/r/thing.html.markdown.tmpl"));
        assert!(msg.contains("denied"));
        assert_eq!(err.kind(), ErrorKind::FileIo);
    }

    #[test]
    fn test_host_tool_output_is_verbatim() {
        let err = DocsError::HostTool {
            command: "terraform init".to_string(),
            output: "Error: Failed to query available provider packages".to_string(),
        };
        assert!(err
            .to_string()
            .contains("Error: Failed to query available provider packages"));
        assert_eq!(err.kind(), ErrorKind::HostTool);
    }

    #[test]
    fn test_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.with_path("/tmp/nope").unwrap_err();
        match err {
            DocsError::Io { path, .. } => assert_eq!(path, PathBuf::from("/tmp/nope")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
