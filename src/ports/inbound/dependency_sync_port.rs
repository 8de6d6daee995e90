use crate::application::dto::{SyncRequest, SyncResponse};
use crate::shared::Result;

/// DependencySyncPort - Inbound port for the dependency sync use case
///
/// This port defines the interface that external adapters (CLI, etc.)
/// use to trigger a sync. It represents the application's public API.
pub trait DependencySyncPort {
    /// Runs the full sync pipeline: preflight, scan, extract, apply
    ///
    /// # Arguments
    /// * `request` - Request parameters containing project path and options
    ///
    /// # Returns
    /// A response describing what was missing, added, and failed
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package manager is not reachable on PATH
    /// - The analyzer is unavailable and could not be installed
    /// - The scan process could not be launched
    fn sync_dependencies(&self, request: SyncRequest) -> Result<SyncResponse>;
}
