use crate::application::dto::{IngestRequest, IngestResponse};
use crate::shared::Result;

/// ScanIngestionPort - Inbound port for applying scan reports
///
/// This port defines the interface that external adapters (CLI, agents
/// pushing reports, etc.) use to feed scans into the inventory.
pub trait ScanIngestionPort {
    /// Applies one scan report to the stored inventory
    ///
    /// # Returns
    /// The host that was updated and a summary of the timeline changes.
    /// Per-package conflicts are reported in the summary, not as an error.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The scan report cannot be read or is invalid
    /// - The scan is older than the last scan applied to the host
    /// - The inventory store cannot be read or written
    fn ingest(&self, request: IngestRequest) -> Result<IngestResponse>;
}
