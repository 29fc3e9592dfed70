/// Use cases module containing application business logic orchestration
mod ingest_scan;
mod inventory_report;

pub use ingest_scan::IngestScanUseCase;
pub use inventory_report::InventoryReportUseCase;
