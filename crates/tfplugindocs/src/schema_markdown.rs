//! Markdown rendering of a resource's schema block.
//!
//! Attributes are grouped into Required, Optional and Read-only. Nested blocks
//! are listed alongside attributes and documented in their own anchored
//! sections after the top-level groups.

use std::fmt::Write as _;

use serde_json::Value;

use crate::schema::{NestedBlock, NestingMode, SchemaAttribute, SchemaBlock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Required,
    Optional,
    ReadOnly,
}

impl Group {
    const ALL: [Group; 3] = [Group::Required, Group::Optional, Group::ReadOnly];

    fn title(self) -> &'static str {
        match self {
            Group::Required => "Required",
            Group::Optional => "Optional",
            Group::ReadOnly => "Read-only",
        }
    }

    fn of_attribute(attr: &SchemaAttribute) -> Self {
        if attr.required {
            Group::Required
        } else if attr.optional {
            Group::Optional
        } else {
            Group::ReadOnly
        }
    }

    fn of_block(block: &NestedBlock) -> Self {
        if block.min_items > 0 {
            Group::Required
        } else {
            Group::Optional
        }
    }
}

/// Render the `## Schema` section for a top-level block.
pub fn render_schema_markdown(block: &SchemaBlock) -> String {
    let mut out = String::from("## Schema\n");
    let mut nested = Vec::new();

    for group in Group::ALL {
        let items = group_items(block, group, "", &mut nested);
        if items.is_empty() {
            continue;
        }
        let _ = write!(out, "\n### {}\n\n", group.title());
        for item in items {
            out.push_str(&item);
            out.push('\n');
        }
    }

    while !nested.is_empty() {
        let pending = std::mem::take(&mut nested);
        for (path, block) in pending {
            let _ = write!(
                out,
                "\n<a id=\"{}\"></a>\n### Nested Schema for `{}`\n",
                anchor(&path),
                path
            );
            for group in Group::ALL {
                let items = group_items(&block.block, group, &path, &mut nested);
                if items.is_empty() {
                    continue;
                }
                let _ = write!(out, "\n{}:\n\n", group.title());
                for item in items {
                    out.push_str(&item);
                    out.push('\n');
                }
            }
        }
    }

    out
}

/// Bullet lines for one group, queueing nested blocks for later sections.
fn group_items<'a>(
    block: &'a SchemaBlock,
    group: Group,
    parent: &str,
    nested: &mut Vec<(String, &'a NestedBlock)>,
) -> Vec<String> {
    let mut entries: Vec<(&str, String)> = Vec::new();

    for (name, attr) in &block.attributes {
        if Group::of_attribute(attr) == group {
            entries.push((name.as_str(), attribute_line(name, attr)));
        }
    }

    for (name, nested_block) in &block.block_types {
        if Group::of_block(nested_block) != group {
            continue;
        }
        let path = if parent.is_empty() {
            name.clone()
        } else {
            format!("{parent}.{name}")
        };
        entries.push((name.as_str(), block_line(name, nested_block, &path)));
        nested.push((path, nested_block));
    }

    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries.into_iter().map(|(_, line)| line).collect()
}

fn attribute_line(name: &str, attr: &SchemaAttribute) -> String {
    let mut traits = vec![type_string(&attr.attribute_type)];
    if attr.sensitive {
        traits.push("Sensitive".to_string());
    }
    if attr.deprecated {
        traits.push("Deprecated".to_string());
    }

    let mut line = format!("- **{name}** ({})", traits.join(", "));
    let description = attr.description.trim();
    if !description.is_empty() {
        line.push(' ');
        line.push_str(description);
    }
    line
}

fn block_line(name: &str, block: &NestedBlock, path: &str) -> String {
    let mut kind = match block.nesting_mode {
        NestingMode::Single | NestingMode::Group => "Block".to_string(),
        NestingMode::List => "Block List".to_string(),
        NestingMode::Set => "Block Set".to_string(),
        NestingMode::Map => "Block Map".to_string(),
    };
    if block.min_items > 0 {
        let _ = write!(kind, ", Min: {}", block.min_items);
    }
    if block.max_items > 0 {
        let _ = write!(kind, ", Max: {}", block.max_items);
    }
    if block.block.deprecated {
        kind.push_str(", Deprecated");
    }

    let mut line = format!("- **{name}** ({kind})");
    let description = block.block.description.trim();
    if !description.is_empty() {
        line.push(' ');
        line.push_str(description);
    }
    let _ = write!(
        line,
        " (see [below for nested schema](#{}))",
        anchor(path)
    );
    line
}

fn anchor(path: &str) -> String {
    format!("nestedblock--{}", path.replace('.', "--"))
}

/// Human-readable name of a cty type in its JSON encoding.
pub fn type_string(ty: &Value) -> String {
    match ty {
        Value::String(primitive) => match primitive.as_str() {
            "string" => "String".to_string(),
            "number" => "Number".to_string(),
            "bool" => "Boolean".to_string(),
            "dynamic" => "Dynamic".to_string(),
            other => other.to_string(),
        },
        Value::Array(parts) => match parts.as_slice() {
            [Value::String(kind), element] => match kind.as_str() {
                "list" => format!("List of {}", type_string(element)),
                "set" => format!("Set of {}", type_string(element)),
                "map" => format!("Map of {}", type_string(element)),
                "object" => "Object".to_string(),
                "tuple" => "Tuple".to_string(),
                other => other.to_string(),
            },
            [Value::String(kind), ..] if kind == "object" => "Object".to_string(),
            _ => "Dynamic".to_string(),
        },
        _ => "Dynamic".to_string(),
    }
}
