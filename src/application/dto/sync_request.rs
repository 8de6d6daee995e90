use std::path::PathBuf;

/// SyncRequest - Internal request DTO for the dependency sync use case
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Path to the project directory the analyzer scans
    pub project_path: PathBuf,
    /// Report the missing list without invoking any add command
    pub dry_run: bool,
    /// Package names that are never added even when reported missing
    pub exclude_packages: Vec<String>,
    /// Package names added to the dev group instead of the default group
    pub dev_packages: Vec<String>,
}

impl SyncRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            dry_run: false,
            exclude_packages: Vec::new(),
            dev_packages: Vec::new(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_exclude_packages(mut self, exclude_packages: Vec<String>) -> Self {
        self.exclude_packages = exclude_packages;
        self
    }

    pub fn with_dev_packages(mut self, dev_packages: Vec<String>) -> Self {
        self.dev_packages = dev_packages;
        self
    }
}
