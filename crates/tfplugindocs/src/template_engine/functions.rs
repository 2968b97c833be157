//! Template functions that embed files from the provider source tree.

use std::collections::HashMap;
use std::path::PathBuf;

use tera::{Function, Result, Value};

/// Wrap `content` in a fenced code block tagged with `format`.
///
/// Surrounding whitespace is trimmed; empty content yields an empty string.
pub(crate) fn code_block(format: &str, content: &str) -> String {
    let content = content.trim();
    if content.is_empty() {
        return String::new();
    }
    format!("```{format}\n{content}\n```")
}

/// `codefile(format="shell", file="examples/...")` and, with a fixed format,
/// `tffile(file="examples/...")`.
#[derive(Debug, Clone)]
pub(crate) struct CodeFile {
    base_dir: PathBuf,
    format: Option<&'static str>,
}

impl CodeFile {
    /// `codefile`: the caller names the code block format.
    pub(crate) fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            format: None,
        }
    }

    /// `tffile`: always a `terraform` code block.
    pub(crate) fn terraform(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            format: Some("terraform"),
        }
    }
}

impl Function for CodeFile {
    fn call(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let file = args
            .get("file")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("expected a `file` string argument"))?;

        let format = match self.format {
            Some(format) => format,
            None => args
                .get("format")
                .and_then(Value::as_str)
                .ok_or_else(|| tera::Error::msg("codefile expects a `format` string argument"))?,
        };

        let path = self.base_dir.join(file);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| tera::Error::chain(format!("unable to read {}", path.display()), e))?;

        Ok(Value::String(code_block(format, &content)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}
