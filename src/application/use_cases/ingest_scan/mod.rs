use crate::application::dto::{IngestRequest, IngestResponse};
use crate::inventory::domain::{Host, ScanReport};
use crate::inventory::services::{ReconcileSummary, ScanReconciler};
use crate::ports::inbound::ScanIngestionPort;
use crate::ports::outbound::{InventoryRepository, ProgressReporter, ScanReportReader};
use crate::shared::Result;
use tracing::{debug, info};

/// IngestScanUseCase - Applies a scan report to the stored inventory
///
/// This use case orchestrates the ingestion workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `R` - InventoryRepository implementation
/// * `S` - ScanReportReader implementation
/// * `P` - ProgressReporter implementation
pub struct IngestScanUseCase<R, S, P> {
    repository: R,
    scan_report_reader: S,
    progress_reporter: P,
}

impl<R, S, P> IngestScanUseCase<R, S, P>
where
    R: InventoryRepository,
    S: ScanReportReader,
    P: ProgressReporter,
{
    /// Creates a new IngestScanUseCase with injected dependencies
    pub fn new(repository: R, scan_report_reader: S, progress_reporter: P) -> Self {
        Self {
            repository,
            scan_report_reader,
            progress_reporter,
        }
    }

    /// Executes the scan ingestion use case
    ///
    /// # Arguments
    /// * `request` - Ingestion request containing the scan report path and options
    ///
    /// # Returns
    /// IngestResponse with the per-outcome counts and any package conflicts.
    /// The host is stored even when some packages conflicted.
    pub fn execute(&self, request: IngestRequest) -> Result<IngestResponse> {
        // Step 1: Read the scan report
        let report = self.read_scan_report(&request)?;

        // Step 2: Load the host, or start tracking it
        let (mut host, created_host) = match self.repository.load_host(&report.hostname)? {
            Some(host) => (host, false),
            None => (Self::new_host(&report), true),
        };
        if created_host {
            self.progress_reporter
                .report(&format!("🆕 New host: {}", report.hostname));
        }

        // Step 3: Reconcile timelines; the host is untouched if the scan is rejected
        let summary = ScanReconciler::reconcile(&mut host, &report)?;
        if !created_host {
            host.update_details(
                report.ip_address.clone(),
                report.operating_system.clone(),
                report.os_family,
                report.architecture.clone(),
            );
        }
        self.report_summary(&summary);

        // Step 4: Persist
        self.repository.save_host(&host)?;
        info!(
            hostname = host.hostname(),
            changed = summary.changed(),
            conflicts = summary.conflicts.len(),
            "Scan ingested"
        );

        Ok(IngestResponse::new(
            host.hostname().to_string(),
            created_host,
            summary,
        ))
    }

    fn read_scan_report(&self, request: &IngestRequest) -> Result<ScanReport> {
        self.progress_reporter.report(&format!(
            "📖 Loading scan report from: {}",
            request.scan_path.display()
        ));

        let mut report = self.scan_report_reader.read_scan_report(&request.scan_path)?;
        if request.force_partial && report.full_inventory {
            debug!("Treating full inventory report as partial");
            report.full_inventory = false;
        }

        self.progress_reporter.report(&format!(
            "✅ {} reported {} package(s) at {}{}",
            report.hostname,
            report.packages.len(),
            report.scanned_at.to_rfc3339(),
            if report.full_inventory {
                ""
            } else {
                " (partial)"
            }
        ));

        Ok(report)
    }

    fn new_host(report: &ScanReport) -> Host {
        Host::new(
            report.hostname.clone(),
            report.ip_address.clone(),
            report.operating_system.clone(),
            report.os_family,
            report.architecture.clone(),
            None,
            None,
        )
    }

    fn report_summary(&self, summary: &ReconcileSummary) {
        for conflict in &summary.conflicts {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} ({}): {}",
                conflict.package, conflict.ecosystem, conflict.error
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "Timelines updated: {} new, {} confirmed, {} upgraded/downgraded, {} reinstalled, {} removed",
            summary.created,
            summary.extended,
            summary.transitioned,
            summary.reactivated,
            summary.removed
        ));
    }
}

impl<R, S, P> ScanIngestionPort for IngestScanUseCase<R, S, P>
where
    R: InventoryRepository,
    S: ScanReportReader,
    P: ProgressReporter,
{
    fn ingest(&self, request: IngestRequest) -> Result<IngestResponse> {
        self.execute(request)
    }
}
