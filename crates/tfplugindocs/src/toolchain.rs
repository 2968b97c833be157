//! External process boundary: the Go compiler and the Terraform CLI.
//!
//! The pipeline only talks to these tools through [`Toolchain`], so tests can
//! substitute a fake that returns canned schema output. [`ProcessToolchain`]
//! is the real implementation and shells out via `std::process::Command`,
//! capturing stdout/stderr rather than streaming them.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::config::GeneratorConfig;
use crate::error::{DocsError, Result};

/// Compile and host-tool operations needed for schema extraction.
pub trait Toolchain {
    /// Compile the provider source into an executable at `output`.
    fn compile_provider(&self, provider: &str, output: &Path) -> Result<()>;

    /// Run the host tool with `args` in `work_dir`, returning its stdout.
    fn run_terraform(&self, work_dir: &Path, args: &[&str]) -> Result<Vec<u8>>;
}

/// Runs the real `go` and `terraform` binaries.
#[derive(Debug, Clone)]
pub struct ProcessToolchain {
    go: PathBuf,
    terraform: PathBuf,
    provider_dir: PathBuf,
}

impl ProcessToolchain {
    pub fn new(
        go: impl Into<PathBuf>,
        terraform: impl Into<PathBuf>,
        provider_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            go: go.into(),
            terraform: terraform.into(),
            provider_dir: provider_dir.into(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.go, &config.terraform, &config.provider_dir)
    }
}

impl Toolchain for ProcessToolchain {
    fn compile_provider(&self, provider: &str, output: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.go);
        cmd.arg("build")
            .arg("-o")
            .arg(output)
            .current_dir(&self.provider_dir);

        let out = run(&mut cmd, &self.go)?;
        if !out.status.success() {
            return Err(DocsError::Compile {
                provider: provider.to_string(),
                output: combined_output(&out),
            });
        }
        Ok(())
    }

    fn run_terraform(&self, work_dir: &Path, args: &[&str]) -> Result<Vec<u8>> {
        let mut cmd = Command::new(&self.terraform);
        cmd.args(args).current_dir(work_dir);

        let out = run(&mut cmd, &self.terraform)?;
        if !out.status.success() {
            return Err(DocsError::HostTool {
                command: command_line(&self.terraform, args),
                output: combined_output(&out),
            });
        }
        Ok(out.stdout)
    }
}

fn run(cmd: &mut Command, program: &Path) -> Result<Output> {
    tracing::debug!(?cmd, "running command");
    cmd.output().map_err(|source| DocsError::Spawn {
        program: program.display().to_string(),
        source,
    })
}

fn command_line(program: &Path, args: &[&str]) -> String {
    std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsStr::new))
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stderr followed by stdout, lossily decoded.
fn combined_output(out: &Output) -> String {
    let stderr = String::from_utf8_lossy(&out.stderr);
    let stdout = String::from_utf8_lossy(&out.stdout);
    match (stderr.trim().is_empty(), stdout.trim().is_empty()) {
        (false, false) => format!("{}\n{}", stderr.trim_end(), stdout.trim_end()),
        (false, true) => stderr.trim_end().to_string(),
        (true, _) => stdout.trim_end().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_command_line() {
        assert_eq!(
            command_line(Path::new("terraform"), &["providers", "schema", "-json"]),
            "terraform providers schema -json"
        );
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = ProcessToolchain::new(
            "/nonexistent/go",
            "/nonexistent/terraform",
            dir.path(),
        );

        let err = toolchain
            .run_terraform(dir.path(), &["version"])
            .unwrap_err();
        assert!(matches!(err, DocsError::Spawn { .. }));
        assert_eq!(err.kind(), ErrorKind::HostTool);
        assert!(err.to_string().contains("/nonexistent/terraform"));
    }

    #[cfg(unix)]
    #[test]
    fn test_terraform_stdout_is_captured() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = ProcessToolchain::new("go", "sh", dir.path());

        let stdout = toolchain
            .run_terraform(dir.path(), &["-c", "printf '{\"format_version\":\"0.1\"}'"])
            .unwrap();
        assert_eq!(stdout, br#"{"format_version":"0.1"}"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_terraform_failure_surfaces_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = ProcessToolchain::new("go", "sh", dir.path());

        let err = toolchain
            .run_terraform(dir.path(), &["-c", "echo 'Error: plugin not found' >&2; exit 1"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HostTool);
        assert!(err.to_string().contains("Error: plugin not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_compile_failure_is_compile_error() {
        let dir = tempfile::tempdir().unwrap();
        let toolchain = ProcessToolchain::new("false", "terraform", dir.path());

        let err = toolchain
            .compile_provider("widget", &dir.path().join("terraform-provider-widget"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Compile);
        assert!(err.to_string().contains("widget"));
    }
}
