/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use uv_depsync::prelude::*;

const SAMPLE_REPORT: &str = "deptry 0.23.0\nScanning 42 files...\n\nobsolete dependencies:\n  six\n\nmissing dependencies:\n  requests\n  numpy\n\nFound issues in the project.\n";

fn request() -> SyncRequest {
    SyncRequest::new(PathBuf::from("."))
}

#[test]
fn test_sync_happy_path() {
    let package_manager = MockPackageManager::new();
    let analyzer = MockDependencyAnalyzer::new(SAMPLE_REPORT);
    let progress_reporter = MockProgressReporter::new();

    let use_case = SyncDependenciesUseCase::new(
        package_manager.clone(),
        analyzer.clone(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(package_manager.attempted_names(), vec!["requests", "numpy"]);
    assert_eq!(analyzer.scan_count(), 1);
    assert_eq!(response.added.len(), 2);
    assert!(!response.has_failures());
    assert!(progress_reporter.message_count() > 0);
}

#[test]
fn test_obsolete_entries_never_added() {
    let package_manager = MockPackageManager::new();
    let analyzer = MockDependencyAnalyzer::new(SAMPLE_REPORT);
    let use_case = SyncDependenciesUseCase::new(
        package_manager.clone(),
        analyzer,
        MockProgressReporter::new(),
    );

    use_case.execute(request()).unwrap();

    assert!(!package_manager.attempted_names().contains(&"six".to_string()));
}

#[test]
fn test_clean_report_is_success_with_zero_adds() {
    let package_manager = MockPackageManager::new();
    let analyzer = MockDependencyAnalyzer::new("deptry 0.23.0\nNo dependency issues found.\n");
    let progress_reporter = MockProgressReporter::new();
    let use_case = SyncDependenciesUseCase::new(
        package_manager.clone(),
        analyzer,
        progress_reporter.clone(),
    );

    let response = use_case.execute(request()).unwrap();

    assert!(response.is_up_to_date());
    assert!(package_manager.add_calls().is_empty());
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("already up to date")));
}

#[test]
fn test_partial_failure_attempts_every_item() {
    let package_manager = MockPackageManager::new().failing_on(&["requests"]);
    let analyzer = MockDependencyAnalyzer::new(SAMPLE_REPORT);
    let use_case = SyncDependenciesUseCase::new(
        package_manager.clone(),
        analyzer,
        MockProgressReporter::new(),
    );

    let response = use_case.execute(request()).unwrap();

    assert_eq!(package_manager.attempted_names(), vec!["requests", "numpy"]);
    assert!(response.has_failures());
    assert_eq!(response.added.len(), 1);
    assert_eq!(response.failed.len(), 1);
}

#[test]
fn test_unavailable_manager_aborts_before_scan() {
    let package_manager = MockPackageManager::unavailable();
    let analyzer = MockDependencyAnalyzer::new(SAMPLE_REPORT);
    let use_case = SyncDependenciesUseCase::new(
        package_manager.clone(),
        analyzer.clone(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(request());

    assert!(result.is_err());
    assert_eq!(analyzer.scan_count(), 0);
}

#[test]
fn test_missing_analyzer_installed_into_dev_group() {
    let package_manager = MockPackageManager::new();
    let analyzer = MockDependencyAnalyzer::new(SAMPLE_REPORT).not_installed();
    let use_case = SyncDependenciesUseCase::new(
        package_manager.clone(),
        analyzer,
        MockProgressReporter::new(),
    );

    use_case.execute(request()).unwrap();

    let calls = package_manager.add_calls();
    assert_eq!(calls[0], ("deptry".to_string(), DependencyGroup::Dev));
    assert_eq!(
        package_manager.attempted_names(),
        vec!["deptry", "requests", "numpy"]
    );
}

#[test]
fn test_dry_run_reports_without_adding() {
    let package_manager = MockPackageManager::new();
    let analyzer = MockDependencyAnalyzer::new(SAMPLE_REPORT);
    let progress_reporter = MockProgressReporter::new();
    let use_case = SyncDependenciesUseCase::new(
        package_manager.clone(),
        analyzer,
        progress_reporter.clone(),
    );

    let response = use_case.execute(request().with_dry_run(true)).unwrap();

    assert!(package_manager.add_calls().is_empty());
    assert_eq!(response.missing.len(), 2);
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("requests")));
}

#[test]
fn test_config_driven_exclusions_and_dev_routing() {
    let package_manager = MockPackageManager::new();
    let analyzer = MockDependencyAnalyzer::new(
        "missing dependencies:\n  requests\n  pytest-cov\n  boto3\n\n",
    );
    let use_case = SyncDependenciesUseCase::new(
        package_manager.clone(),
        analyzer,
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(
            request()
                .with_exclude_packages(vec!["boto3".to_string()])
                .with_dev_packages(vec!["pytest-cov".to_string()]),
        )
        .unwrap();

    assert_eq!(
        package_manager.add_calls(),
        vec![
            ("requests".to_string(), DependencyGroup::Main),
            ("pytest-cov".to_string(), DependencyGroup::Dev),
        ]
    );
    assert_eq!(response.missing.len(), 2);
}

#[test]
fn test_report_parser_mixed_sections_example() {
    let report = "obsolete dependencies:\nfoo\n\nmissing dependencies:\nrequests\nnumpy\n\n";
    let missing = ReportParser::extract_missing(report);
    let names: Vec<&str> = missing.iter().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["requests", "numpy"]);
}
