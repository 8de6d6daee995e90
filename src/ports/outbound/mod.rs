/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (the uv binary, the deptry
/// analyzer, the console).
pub mod dependency_analyzer;
pub mod package_manager;
pub mod progress_reporter;

pub use dependency_analyzer::DependencyAnalyzer;
pub use package_manager::{DependencyGroup, PackageManager};
pub use progress_reporter::ProgressReporter;
