//! Inventory read model for query operations
//!
//! Aggregates a host and its package timelines in a report-friendly shape.

use super::package_view::PackageView;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Main read model for a host inventory report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryReadModel {
    pub metadata: ReportMetadataView,
    pub host: HostView,
    pub packages: Vec<PackageView>,
}

impl InventoryReadModel {
    pub fn active_package_count(&self) -> usize {
        self.packages.iter().filter(|p| p.active).count()
    }
}

/// View representation of report metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadataView {
    pub generated_at: DateTime<Utc>,
    pub tool_name: String,
    pub tool_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
}

/// View representation of the scanned host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostView {
    pub id: String,
    pub hostname: String,
    pub ip_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    pub os_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    pub status: String,
    pub network_exposure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_scan: Option<DateTime<Utc>>,
}
