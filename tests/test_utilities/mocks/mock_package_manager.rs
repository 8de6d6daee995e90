use std::sync::{Arc, Mutex};
use uv_depsync::prelude::*;

/// Mock PackageManager for testing that records every add invocation
#[derive(Clone)]
pub struct MockPackageManager {
    available: bool,
    fail_names: Vec<String>,
    add_calls: Arc<Mutex<Vec<(String, DependencyGroup)>>>,
}

impl Default for MockPackageManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPackageManager {
    pub fn new() -> Self {
        Self {
            available: true,
            fail_names: Vec::new(),
            add_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Make `add` fail (after recording the call) for the given names
    pub fn failing_on(mut self, names: &[&str]) -> Self {
        self.fail_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn add_calls(&self) -> Vec<(String, DependencyGroup)> {
        self.add_calls.lock().unwrap().clone()
    }

    /// Names passed to `add`, in invocation order, including failed ones
    pub fn attempted_names(&self) -> Vec<String> {
        self.add_calls().into_iter().map(|(n, _)| n).collect()
    }
}

impl PackageManager for MockPackageManager {
    fn is_available(&self) -> bool {
        self.available
    }

    fn add(&self, package: &PackageName, group: DependencyGroup) -> Result<()> {
        self.add_calls
            .lock()
            .unwrap()
            .push((package.as_str().to_string(), group));
        if self.fail_names.iter().any(|n| n == package.as_str()) {
            anyhow::bail!("uv add {} exited with status 1", package);
        }
        Ok(())
    }
}
