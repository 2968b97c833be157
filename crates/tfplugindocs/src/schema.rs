//! Provider schema model, as emitted by `terraform providers schema -json`.
//!
//! Only the parts needed to document a provider are modelled; unknown fields
//! are ignored. Maps are ordered so every pass over the schema visits entries
//! in the same order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DocsError, Result};

/// Top-level schema document keyed by provider source address.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderSchemas {
    #[serde(default)]
    pub format_version: String,

    #[serde(default)]
    pub provider_schemas: BTreeMap<String, ProviderSchema>,
}

impl ProviderSchemas {
    /// Parse the JSON output of `terraform providers schema -json`.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| DocsError::SchemaParse { source })
    }

    /// Take a provider schema by bare short name, then by registry address.
    pub fn into_provider(
        mut self,
        short_name: &str,
        registry_namespace: &str,
    ) -> Option<ProviderSchema> {
        self.provider_schemas.remove(short_name).or_else(|| {
            self.provider_schemas
                .remove(&format!("{registry_namespace}/{short_name}"))
        })
    }
}

/// Resource, data source, and provider configuration schemas for one provider.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Schema>,

    #[serde(default)]
    pub resource_schemas: BTreeMap<String, Schema>,

    #[serde(default)]
    pub data_source_schemas: BTreeMap<String, Schema>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Schema {
    #[serde(default)]
    pub version: u64,

    #[serde(default)]
    pub block: SchemaBlock,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemaBlock {
    #[serde(default)]
    pub attributes: BTreeMap<String, SchemaAttribute>,

    #[serde(default)]
    pub block_types: BTreeMap<String, NestedBlock>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_kind: DescriptionKind,

    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemaAttribute {
    /// cty type in its JSON encoding, e.g. `"string"` or `["list", "string"]`.
    #[serde(rename = "type", default)]
    pub attribute_type: serde_json::Value,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_kind: DescriptionKind,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub computed: bool,

    #[serde(default)]
    pub sensitive: bool,

    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NestedBlock {
    #[serde(default)]
    pub nesting_mode: NestingMode,

    #[serde(default)]
    pub block: SchemaBlock,

    #[serde(default)]
    pub min_items: u64,

    #[serde(default)]
    pub max_items: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionKind {
    #[default]
    Plain,
    Markdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NestingMode {
    #[default]
    Single,
    Group,
    List,
    Set,
    Map,
}
