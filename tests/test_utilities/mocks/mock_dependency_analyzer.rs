use std::sync::{Arc, Mutex};
use uv_depsync::prelude::*;

/// Mock DependencyAnalyzer for testing that serves a canned report
#[derive(Clone)]
pub struct MockDependencyAnalyzer {
    version: Option<String>,
    report: String,
    scan_calls: Arc<Mutex<usize>>,
}

impl MockDependencyAnalyzer {
    pub fn new(report: impl Into<String>) -> Self {
        Self {
            version: Some("deptry 0.23.0".to_string()),
            report: report.into(),
            scan_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Make the version probe fail, as if deptry were not installed
    pub fn not_installed(mut self) -> Self {
        self.version = None;
        self
    }

    pub fn scan_count(&self) -> usize {
        *self.scan_calls.lock().unwrap()
    }
}

impl DependencyAnalyzer for MockDependencyAnalyzer {
    fn probe_version(&self) -> Result<String> {
        match &self.version {
            Some(v) => Ok(v.clone()),
            None => anyhow::bail!("deptry: command not found"),
        }
    }

    fn scan(&self) -> Result<String> {
        *self.scan_calls.lock().unwrap() += 1;
        Ok(self.report.clone())
    }
}
