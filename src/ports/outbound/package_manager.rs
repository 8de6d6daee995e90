use crate::dependency_sync::domain::PackageName;
use crate::shared::Result;

/// The dependency group a package is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyGroup {
    /// Regular runtime dependency
    Main,
    /// Development-only dependency (`--group dev`)
    Dev,
}

/// PackageManager port for mutating the project manifest
///
/// This port abstracts the package manager CLI. The manifest file itself is
/// never opened by this tool; every mutation goes through the manager binary,
/// whose exit status is the only success signal.
pub trait PackageManager {
    /// Checks whether the package manager executable is reachable on PATH
    fn is_available(&self) -> bool;

    /// Adds a single package to the project manifest
    ///
    /// # Arguments
    /// * `package` - The package to add
    /// * `group` - Which dependency group the package goes into
    ///
    /// # Errors
    /// Returns an error if the add command could not be spawned or
    /// exited with a non-zero status.
    fn add(&self, package: &PackageName, group: DependencyGroup) -> Result<()>;
}
