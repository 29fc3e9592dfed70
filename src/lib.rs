//! scopeon-inventory - package version history for scanned hosts
//!
//! This library records, per host and per package, the contiguous periods
//! during which each version was observed installed. Scan reports are
//! reconciled into package timelines that never let two different versions
//! be installed at the same instant.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Version intervals, package timelines, hosts
//!   and the scan reconciler. Pure logic, no I/O.
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): JSON store, scan report reader, formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scopeon_inventory::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = IngestScanUseCase::new(
//!     JsonInventoryStore::new(PathBuf::from(".scopeon")),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(IngestRequest::new(PathBuf::from("scan.json"), false))?;
//! println!("{} timeline(s) changed", response.summary.changed());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, JsonInventoryStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{IngestRequest, IngestResponse, OutputFormat, ReportRequest};
    pub use crate::application::read_models::InventoryReadModel;
    pub use crate::application::use_cases::{IngestScanUseCase, InventoryReportUseCase};
    pub use crate::inventory::domain::{
        Host, Observation, ObservedPackage, PackageEcosystem, PackageName, PackageTimeline,
        ScanReport, Timestamp, Version, VersionInterval,
    };
    pub use crate::inventory::services::{ReconcileSummary, ScanReconciler};
    pub use crate::ports::inbound::ScanIngestionPort;
    pub use crate::ports::outbound::{
        InventoryFormatter, InventoryRepository, OutputPresenter, ProgressReporter,
        ScanReportReader,
    };
    pub use crate::shared::error::{InventoryError, TimelineError};
    pub use crate::shared::Result;
}
