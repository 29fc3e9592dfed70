use std::path::PathBuf;

/// IngestRequest - Internal request DTO for the scan ingestion use case
#[derive(Debug, Clone)]
pub struct IngestRequest {
    /// Path to the scan report JSON file
    pub scan_path: PathBuf,
    /// Treat the report as a partial inventory even if it claims to be full.
    /// Partial reports never remove packages.
    pub force_partial: bool,
}

impl IngestRequest {
    pub fn new(scan_path: PathBuf, force_partial: bool) -> Self {
        Self {
            scan_path,
            force_partial,
        }
    }
}
