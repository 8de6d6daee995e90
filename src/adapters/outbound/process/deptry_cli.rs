use crate::ports::outbound::DependencyAnalyzer;
use crate::shared::error::DepsyncError;
use crate::shared::Result;
use std::path::PathBuf;
use std::process::Command;

/// DeptryCli adapter for the deptry analyzer
///
/// This adapter implements the DependencyAnalyzer port. deptry is always
/// invoked through `uv run` so the probe and scan see the project's managed
/// environment rather than whatever happens to be on PATH.
pub struct DeptryCli {
    program: String,
    project_root: PathBuf,
}

impl DeptryCli {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            program: "uv".to_string(),
            project_root,
        }
    }

    /// Overrides the binary name, for tests
    pub fn with_program(program: impl Into<String>, project_root: PathBuf) -> Self {
        Self {
            program: program.into(),
            project_root,
        }
    }
}

impl DependencyAnalyzer for DeptryCli {
    fn probe_version(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .args(["run", "deptry", "--version"])
            .current_dir(&self.project_root)
            .output()
            .map_err(|e| anyhow::anyhow!("Failed to run '{} run deptry --version': {}", self.program, e))?;

        if !output.status.success() {
            anyhow::bail!(
                "'{} run deptry --version' exited with {}",
                self.program,
                output.status
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn scan(&self) -> Result<String> {
        // deptry exits non-zero whenever it finds issues, so the exit
        // status is deliberately ignored here; only a spawn failure is
        // treated as an error.
        let output = Command::new(&self.program)
            .args(["run", "deptry", "."])
            .current_dir(&self.project_root)
            .output()
            .map_err(|e| DepsyncError::ScanFailed {
                details: e.to_string(),
            })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
