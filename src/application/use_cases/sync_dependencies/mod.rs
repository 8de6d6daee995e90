use crate::application::dto::{SyncRequest, SyncResponse};
use crate::dependency_sync::domain::PackageName;
use crate::dependency_sync::services::ReportParser;
use crate::ports::inbound::DependencySyncPort;
use crate::ports::outbound::{DependencyAnalyzer, DependencyGroup, PackageManager, ProgressReporter};
use crate::shared::error::DepsyncError;
use crate::shared::Result;

/// Name under which the analyzer is installed when the probe fails
const ANALYZER_PACKAGE: &str = "deptry";

/// SyncDependenciesUseCase - Core use case for dependency syncing
///
/// This use case orchestrates the whole pipeline using generic dependency
/// injection for all infrastructure dependencies: preflight the package
/// manager and analyzer, run the scan, extract the missing list, and apply
/// it one add invocation at a time.
///
/// # Type Parameters
/// * `PM` - PackageManager implementation
/// * `DA` - DependencyAnalyzer implementation
/// * `PR` - ProgressReporter implementation
pub struct SyncDependenciesUseCase<PM, DA, PR> {
    package_manager: PM,
    analyzer: DA,
    progress_reporter: PR,
}

impl<PM, DA, PR> SyncDependenciesUseCase<PM, DA, PR>
where
    PM: PackageManager,
    DA: DependencyAnalyzer,
    PR: ProgressReporter,
{
    /// Creates a new SyncDependenciesUseCase with injected dependencies
    pub fn new(package_manager: PM, analyzer: DA, progress_reporter: PR) -> Self {
        Self {
            package_manager,
            analyzer,
            progress_reporter,
        }
    }

    /// Executes the dependency sync use case
    ///
    /// # Arguments
    /// * `request` - Sync request containing project path and options
    ///
    /// # Returns
    /// SyncResponse describing what was missing, added, and failed
    pub fn execute(&self, request: SyncRequest) -> Result<SyncResponse> {
        // Step 1: Preflight - both external collaborators must be usable
        self.verify_package_manager()?;
        self.ensure_analyzer()?;

        // Step 2: Scan the project tree
        let report = self.run_scan(&request)?;

        // Step 3: Extract the missing list
        let missing = self.extract_missing(&report, &request);

        // Step 4: Apply
        if missing.is_empty() {
            self.progress_reporter
                .report_completion("✅ Dependencies are already up to date");
            return Ok(SyncResponse::new(vec![], vec![], vec![], request.dry_run));
        }

        if request.dry_run {
            return Ok(self.build_dry_run_response(missing));
        }

        Ok(self.apply_missing(missing, &request))
    }

    /// Confirms the package manager executable is reachable on PATH
    fn verify_package_manager(&self) -> Result<()> {
        if !self.package_manager.is_available() {
            return Err(DepsyncError::PackageManagerNotFound.into());
        }
        self.progress_reporter.report("🔧 Found uv on PATH");
        Ok(())
    }

    /// Confirms the analyzer responds to a version probe, installing it
    /// as a dev dependency when it does not
    fn ensure_analyzer(&self) -> Result<()> {
        match self.analyzer.probe_version() {
            Ok(version) => {
                self.progress_reporter
                    .report(&format!("🔍 Using analyzer: {}", version.trim()));
                Ok(())
            }
            Err(_) => {
                self.progress_reporter
                    .report("📦 deptry not found in the environment, installing it...");
                let analyzer_package = PackageName::new(ANALYZER_PACKAGE)?;
                self.package_manager
                    .add(&analyzer_package, DependencyGroup::Dev)
                    .map_err(|e| DepsyncError::AnalyzerInstallFailed {
                        details: e.to_string(),
                    })?;
                Ok(())
            }
        }
    }

    /// Runs the analyzer scan, reporting progress
    fn run_scan(&self, request: &SyncRequest) -> Result<String> {
        self.progress_reporter.report(&format!(
            "🔎 Scanning {} for dependency issues...",
            request.project_path.display()
        ));
        self.analyzer.scan()
    }

    /// Extracts the missing list from the report and applies exclusions
    fn extract_missing(&self, report: &str, request: &SyncRequest) -> Vec<PackageName> {
        let missing = ReportParser::extract_missing(report);
        if request.exclude_packages.is_empty() {
            return missing;
        }

        let original_count = missing.len();
        let filtered: Vec<PackageName> = missing
            .into_iter()
            .filter(|name| !request.exclude_packages.iter().any(|e| e == name.as_str()))
            .collect();

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} package(s) based on configuration",
                excluded_count
            ));
        }

        filtered
    }

    /// Builds a response for dry-run mode (report only, no adds)
    fn build_dry_run_response(&self, missing: Vec<PackageName>) -> SyncResponse {
        self.progress_reporter
            .report(&format!("📋 {} missing package(s):", missing.len()));
        for name in &missing {
            self.progress_reporter.report(&format!("   - {}", name));
        }
        self.progress_reporter
            .report_completion("Dry run: no packages were added");
        SyncResponse::new(missing, vec![], vec![], true)
    }

    /// Invokes the add command once per missing package, in report order.
    ///
    /// A failing add is reported and counted but never stops the loop -
    /// there are no retries and no rollback of earlier adds.
    fn apply_missing(&self, missing: Vec<PackageName>, request: &SyncRequest) -> SyncResponse {
        let total = missing.len();
        self.progress_reporter
            .report(&format!("➕ Adding {} missing package(s)...", total));

        let mut added = Vec::new();
        let mut failed = Vec::new();

        for (idx, name) in missing.iter().enumerate() {
            let group = if request.dev_packages.iter().any(|d| d == name.as_str()) {
                DependencyGroup::Dev
            } else {
                DependencyGroup::Main
            };

            self.progress_reporter
                .report_progress(idx + 1, total, Some(name.as_str()));

            match self.package_manager.add(name, group) {
                Ok(()) => {
                    self.progress_reporter.report(&format!("   ✅ Added {}", name));
                    added.push(name.clone());
                }
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("   ❌ Failed to add {}: {}", name, e));
                    failed.push(name.clone());
                }
            }
        }

        if failed.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "✅ Sync complete: added {} package(s)",
                added.len()
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "⚠️  Sync complete: {} added, {} failed",
                added.len(),
                failed.len()
            ));
        }

        SyncResponse::new(missing, added, failed, false)
    }
}

impl<PM, DA, PR> DependencySyncPort for SyncDependenciesUseCase<PM, DA, PR>
where
    PM: PackageManager,
    DA: DependencyAnalyzer,
    PR: ProgressReporter,
{
    fn sync_dependencies(&self, request: SyncRequest) -> Result<SyncResponse> {
        self.execute(request)
    }
}
