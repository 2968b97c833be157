//! Path templates computing documentation, example, and import locations.
//!
//! A template body is a Tera template over two placeholders:
//!
//! - `name`: the full resource or data source name (`widget_thing`)
//! - `short_name`: the name with the provider prefix removed (`thing`)
//!
//! ```
//! use tfplugindocs::PathTemplate;
//!
//! let tmpl = PathTemplate::new("docs/r/{{ short_name }}.html.markdown.tmpl");
//! let path = tmpl.render("widget_thing", "terraform-provider-widget").unwrap();
//! assert_eq!(path, "docs/r/thing.html.markdown.tmpl");
//! ```

use std::fmt;

use serde::Deserialize;
use tera::{Context, Tera};

use crate::error::{DocsError, Result};

const PROVIDER_NAME_PREFIX: &str = "terraform-provider-";

/// Strip the `terraform-provider-` prefix from a provider name.
pub fn provider_short_name(provider_name: &str) -> &str {
    provider_name
        .strip_prefix(PROVIDER_NAME_PREFIX)
        .unwrap_or(provider_name)
}

/// Strip the `<provider short name>_` prefix from a resource name.
pub fn resource_short_name<'a>(resource_name: &'a str, provider_name: &str) -> &'a str {
    let prefix = format!("{}_", provider_short_name(provider_name));
    resource_name
        .strip_prefix(prefix.as_str())
        .unwrap_or(resource_name)
}

/// An immutable path template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PathTemplate {
    body: String,
}

impl PathTemplate {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Render the path for `resource_name` within `provider_name`.
    ///
    /// An empty template renders to an empty string, which callers treat as
    /// "not applicable".
    pub fn render(&self, resource_name: &str, provider_name: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("name", resource_name);
        context.insert(
            "short_name",
            resource_short_name(resource_name, provider_name),
        );

        Tera::one_off(&self.body, &context, false)
            .map_err(|e| DocsError::template(self.body.clone(), e))
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

impl From<&str> for PathTemplate {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}
