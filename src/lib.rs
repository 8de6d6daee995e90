//! uv-depsync - Dependency bookkeeping for uv projects
//!
//! This library runs the deptry analyzer over a uv-managed Python project,
//! extracts the "missing dependencies" section from its textual report, and
//! adds each missing package to the project manifest via `uv add`. It follows
//! hexagonal architecture: the pipeline is pure orchestration over two
//! external CLIs, reached only through ports.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_sync`): Pure report-parsing logic and value objects
//! - **Application Layer** (`application`): The sync use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use uv_depsync::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let project = PathBuf::from(".");
//!
//! // Create adapters
//! let package_manager = UvCli::new(project.clone());
//! let analyzer = DeptryCli::new(project.clone());
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = SyncDependenciesUseCase::new(package_manager, analyzer, progress_reporter);
//!
//! // Execute
//! let request = SyncRequest::new(project);
//! let response = use_case.execute(request)?;
//! println!("added {} package(s)", response.added.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_sync;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::process::{DeptryCli, UvCli};
    pub use crate::application::dto::{SyncRequest, SyncResponse};
    pub use crate::application::use_cases::SyncDependenciesUseCase;
    pub use crate::dependency_sync::domain::PackageName;
    pub use crate::dependency_sync::services::ReportParser;
    pub use crate::ports::inbound::DependencySyncPort;
    pub use crate::ports::outbound::{
        DependencyAnalyzer, DependencyGroup, PackageManager, ProgressReporter,
    };
    pub use crate::shared::error::{DepsyncError, ExitCode};
    pub use crate::shared::Result;
}
