/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod inventory_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scan_report_reader;

pub use formatter::InventoryFormatter;
pub use inventory_repository::InventoryRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scan_report_reader::ScanReportReader;
