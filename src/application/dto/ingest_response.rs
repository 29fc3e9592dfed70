use crate::inventory::services::ReconcileSummary;

/// IngestResponse - Result of applying one scan report to the store
#[derive(Debug, Clone)]
pub struct IngestResponse {
    pub hostname: String,
    /// True when this scan was the first one seen for the host
    pub created_host: bool,
    pub summary: ReconcileSummary,
}

impl IngestResponse {
    pub fn new(hostname: String, created_host: bool, summary: ReconcileSummary) -> Self {
        Self {
            hostname,
            created_host,
            summary,
        }
    }

    pub fn has_conflicts(&self) -> bool {
        self.summary.has_conflicts()
    }
}
