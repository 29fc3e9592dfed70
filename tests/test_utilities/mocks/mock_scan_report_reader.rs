use scopeon_inventory::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ScanReportReader serving reports registered by path
#[derive(Default)]
pub struct MockScanReportReader {
    reports: HashMap<PathBuf, ScanReport>,
}

impl MockScanReportReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, path: &str, report: ScanReport) -> Self {
        self.reports.insert(PathBuf::from(path), report);
        self
    }
}

impl ScanReportReader for MockScanReportReader {
    fn read_scan_report(&self, path: &Path) -> Result<ScanReport> {
        self.reports.get(path).cloned().ok_or_else(|| {
            InventoryError::ScanReportNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }
}
