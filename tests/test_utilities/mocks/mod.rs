mod mock_dependency_analyzer;
mod mock_package_manager;
mod mock_progress_reporter;

pub use mock_dependency_analyzer::MockDependencyAnalyzer;
pub use mock_package_manager::MockPackageManager;
pub use mock_progress_reporter::MockProgressReporter;
