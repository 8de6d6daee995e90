use crate::dependency_sync::domain::PackageName;
use crate::ports::outbound::{DependencyGroup, PackageManager};
use crate::shared::Result;
use std::path::PathBuf;
use std::process::Command;

/// UvCli adapter for the uv package manager binary
///
/// This adapter implements the PackageManager port by shelling out to
/// `uv add`. The manifest is mutated exclusively by the uv process; this
/// adapter only inspects its exit status.
pub struct UvCli {
    program: String,
    project_root: PathBuf,
}

impl UvCli {
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

impl PackageManager for UvCli {
    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn add(&self, package: &PackageName, group: DependencyGroup) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .arg("add")
            .arg(package.as_str())
            .current_dir(&self.project_root);
        if group == DependencyGroup::Dev {
            command.args(["--group", "dev"]);
        }

        let output = command
            .output()
            .map_err(|e| anyhow::anyhow!("Failed to run '{} add {}': {}", self.program, package, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "'{} add {}' exited with {}: {}",
                self.program,
                package,
                output.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}
