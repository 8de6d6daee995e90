use crate::shared::Result;

/// DependencyAnalyzer port for producing the dependency report
///
/// This port abstracts the analyzer CLI that inspects the project tree
/// and reports missing and obsolete dependencies as human-readable text.
pub trait DependencyAnalyzer {
    /// Probes the analyzer's version inside the managed environment
    ///
    /// # Returns
    /// The version line printed by the analyzer
    ///
    /// # Errors
    /// Returns an error if the analyzer is not installed or the probe
    /// command fails to run.
    fn probe_version(&self) -> Result<String>;

    /// Runs a full scan of the project tree
    ///
    /// # Returns
    /// The analyzer's complete report as captured stdout text. The
    /// analyzer exiting non-zero is NOT a failure here - it does so
    /// whenever it finds issues, which is exactly the interesting case.
    ///
    /// # Errors
    /// Returns an error only if the scan process could not be launched.
    fn scan(&self) -> Result<String>;
}
