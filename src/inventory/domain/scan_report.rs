use super::{OsFamily, PackageEcosystem, PackageName, Timestamp, Version};

/// One package as seen by a scan agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedPackage {
    pub name: PackageName,
    pub ecosystem: PackageEcosystem,
    pub version: Version,
    pub vendor: Option<String>,
    pub origin: Option<String>,
}

/// Snapshot of one host's packages at one instant.
///
/// When `full_inventory` is set the list is exhaustive, so any tracked
/// package that is missing from it has been removed from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub hostname: String,
    pub ip_address: String,
    pub operating_system: Option<String>,
    pub os_family: Option<OsFamily>,
    pub architecture: Option<String>,
    pub scanned_at: Timestamp,
    pub full_inventory: bool,
    pub packages: Vec<ObservedPackage>,
}
