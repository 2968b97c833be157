//! `tfplugindocs schema`: print the extracted provider schema as JSON.

use tfplugindocs::{GeneratorConfig, Generator, ProcessToolchain, TracingProgress};

use crate::output;

pub(crate) fn handle_schema_command(config: &GeneratorConfig) -> anyhow::Result<()> {
    let toolchain = ProcessToolchain::from_config(config);
    // stdout carries the JSON document, so progress only goes to the log
    let progress = TracingProgress;

    let schema = Generator::new(config, &toolchain, &progress).extract_schema()?;
    output::plain(serde_json::to_string_pretty(&schema)?);
    Ok(())
}
