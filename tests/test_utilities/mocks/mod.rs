/// Mock implementations for testing
mod mock_inventory_repository;
mod mock_progress_reporter;
mod mock_scan_report_reader;

pub use mock_inventory_repository::MockInventoryRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scan_report_reader::MockScanReportReader;
