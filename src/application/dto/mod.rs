/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod ingest_request;
mod ingest_response;
mod output_format;
mod report_request;

pub use ingest_request::IngestRequest;
pub use ingest_response::IngestResponse;
pub use output_format::OutputFormat;
pub use report_request::ReportRequest;
