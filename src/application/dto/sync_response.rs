use crate::dependency_sync::domain::PackageName;

/// SyncResponse - Outcome of a dependency sync run
///
/// The apply loop never short-circuits, so `added` and `failed` together
/// cover every package that was attempted, in report order.
#[derive(Debug, Clone)]
pub struct SyncResponse {
    /// Packages the analyzer reported missing (after exclusions)
    pub missing: Vec<PackageName>,
    /// Packages successfully added to the manifest
    pub added: Vec<PackageName>,
    /// Packages whose add command failed
    pub failed: Vec<PackageName>,
    /// Whether this was a dry run (nothing was added)
    pub dry_run: bool,
}

impl SyncResponse {
    pub fn new(
        missing: Vec<PackageName>,
        added: Vec<PackageName>,
        failed: Vec<PackageName>,
        dry_run: bool,
    ) -> Self {
        Self {
            missing,
            added,
            failed,
            dry_run,
        }
    }

    /// True when the analyzer reported nothing to add
    pub fn is_up_to_date(&self) -> bool {
        self.missing.is_empty()
    }

    /// True when at least one add invocation failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
