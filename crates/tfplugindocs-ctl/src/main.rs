//! tfplugindocs
//!
//! Generates a documentation website for a Terraform provider from its source
//! tree: the provider is compiled, its schema exported through the Terraform
//! CLI, missing resource and data source pages are synthesized, and the result
//! is rendered into the website directory.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tfplugindocs::GeneratorConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tfplugindocs", version, about, styles = output::clap_styles())]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Configuration file [default: <provider-dir>/.tfplugindocs.toml]
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the provider documentation website
    Generate(GenerateArgs),
    /// Extract the provider schema and print it as JSON
    Schema(ProviderArgs),
}

/// Provider location and the tools needed to build it.
#[derive(Debug, Args)]
struct ProviderArgs {
    /// Provider source root [default: .]
    #[arg(long, value_name = "DIR")]
    provider_dir: Option<PathBuf>,

    /// Provider name [default: base name of the provider directory]
    #[arg(long, value_name = "NAME")]
    provider_name: Option<String>,

    /// Terraform CLI binary [default: terraform]
    #[arg(long, value_name = "PATH")]
    terraform: Option<PathBuf>,

    /// Go toolchain binary [default: go]
    #[arg(long, value_name = "PATH")]
    go: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[command(flatten)]
    provider: ProviderArgs,

    /// Reuse this scratch directory; it is wiped first and removed afterwards
    #[arg(long, value_name = "DIR")]
    tmp_dir: Option<PathBuf>,

    /// Hand-authored documentation sources [default: docs]
    #[arg(long, value_name = "DIR")]
    docs_dir: Option<PathBuf>,

    /// Example files [default: examples]
    #[arg(long, value_name = "DIR")]
    examples_dir: Option<PathBuf>,

    /// Output directory, rebuilt on every run [default: website]
    #[arg(long, value_name = "DIR")]
    website_dir: Option<PathBuf>,
}

impl ProviderArgs {
    fn search_dir(&self) -> PathBuf {
        self.provider_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn apply(self, config: &mut GeneratorConfig) {
        if let Some(dir) = self.provider_dir {
            config.provider_dir = dir;
        }
        if let Some(name) = self.provider_name {
            config.provider_name = Some(name);
        }
        if let Some(terraform) = self.terraform {
            config.terraform = terraform;
        }
        if let Some(go) = self.go {
            config.go = go;
        }
    }
}

impl GenerateArgs {
    fn apply(self, config: &mut GeneratorConfig) {
        self.provider.apply(config);
        if let Some(dir) = self.tmp_dir {
            config.tmp_dir = Some(dir);
        }
        if let Some(dir) = self.docs_dir {
            config.docs_dir = dir;
        }
        if let Some(dir) = self.examples_dir {
            config.examples_dir = dir;
        }
        if let Some(dir) = self.website_dir {
            config.website_dir = dir;
        }
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::from_default_env().add_directive(format!("tfplugindocs={level}").parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(&cli)?;

    match cli.command {
        Commands::Generate(args) => {
            let search_dir = args.provider.search_dir();
            let mut config =
                cli_config::load_generator_config(cli.config.as_deref(), &search_dir)?;
            args.apply(&mut config);
            commands::handle_generate_command(&config)
        }
        Commands::Schema(args) => {
            let mut config =
                cli_config::load_generator_config(cli.config.as_deref(), &args.search_dir())?;
            args.apply(&mut config);
            commands::handle_schema_command(&config)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.no_color {
        output::disable_color();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_flags_override_config() {
        let cli = Cli::try_parse_from([
            "tfplugindocs",
            "generate",
            "--provider-dir",
            "/src/terraform-provider-widget",
            "--go",
            "/usr/local/go/bin/go",
            "--website-dir",
            "public",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(
            args.provider.search_dir(),
            PathBuf::from("/src/terraform-provider-widget")
        );

        let mut config = GeneratorConfig {
            website_dir: PathBuf::from("from-file"),
            terraform: PathBuf::from("/opt/terraform"),
            ..GeneratorConfig::default()
        };
        args.apply(&mut config);
        assert_eq!(config.website_dir, PathBuf::from("public"));
        assert_eq!(config.go, PathBuf::from("/usr/local/go/bin/go"));
        assert_eq!(config.terraform, PathBuf::from("/opt/terraform"));
        assert_eq!(
            config.provider_dir,
            PathBuf::from("/src/terraform-provider-widget")
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tfplugindocs", "schema", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Commands::Schema(_)));
    }
}
