use crate::inventory::domain::ScanReport;
use crate::shared::Result;
use std::path::Path;

/// ScanReportReader port for reading scan reports produced by scan agents
pub trait ScanReportReader {
    /// Reads and validates a scan report
    ///
    /// # Arguments
    /// * `path` - Location of the report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report does not exist or cannot be read
    /// - The report is not in the expected format
    /// - A package name, version or timestamp is invalid
    fn read_scan_report(&self, path: &Path) -> Result<ScanReport>;
}
