//! `tfplugindocs generate`: run the full documentation pipeline.

use tfplugindocs::{GeneratorConfig, Generator, ProcessToolchain};

use crate::output;

pub(crate) fn handle_generate_command(config: &GeneratorConfig) -> anyhow::Result<()> {
    let toolchain = ProcessToolchain::from_config(config);
    let progress = |msg: &str| output::dim(msg);

    let report = Generator::new(config, &toolchain, &progress).generate()?;

    if report.synthesis.written + report.synthesis.skipped == 0 {
        output::warning("provider schema has no resources or data sources");
    }
    output::success(format!(
        "website written to {}",
        config.website_path().display()
    ));
    output::label("Generated docs", report.synthesis.written);
    output::label("Existing docs", report.synthesis.skipped);
    output::label("Rendered pages", report.render.rendered);
    output::label("Copied files", report.render.copied);
    Ok(())
}
