use std::path::{Path, PathBuf};
use std::process;

use uv_depsync::cli::Args;
use uv_depsync::config;
use uv_depsync::prelude::*;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::PreflightFailure.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Optional per-project configuration
    let config = config::discover_config(&project_path)?.unwrap_or_default();

    // Create adapters (Dependency Injection)
    let package_manager = UvCli::new(project_path.clone());
    let analyzer = DeptryCli::new(project_path.clone());
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = SyncDependenciesUseCase::new(package_manager, analyzer, progress_reporter);

    let request = SyncRequest::new(project_path)
        .with_dry_run(args.dry_run)
        .with_exclude_packages(config.exclude_packages.unwrap_or_default())
        .with_dev_packages(config.dev_packages.unwrap_or_default());

    let response = use_case.sync_dependencies(request)?;

    // Per-item add failures never abort the loop, but they are surfaced
    // through a distinct exit code once the whole list has been attempted.
    if response.has_failures() {
        Ok(ExitCode::AddFailures)
    } else {
        Ok(ExitCode::Success)
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DepsyncError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| DepsyncError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(DepsyncError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Project path is a symbolic link; symbolic links are not allowed".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DepsyncError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
