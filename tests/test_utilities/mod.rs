//! Shared helpers for integration tests
#![allow(dead_code)]

pub mod mocks;

use chrono::{TimeZone, Utc};
use scopeon_inventory::prelude::*;

/// Midnight UTC on the given day of January 2025
pub fn jan(day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
}

pub fn observed(name: &str, ecosystem: PackageEcosystem, version: &str) -> ObservedPackage {
    ObservedPackage {
        name: PackageName::new(name.to_string()).unwrap(),
        ecosystem,
        version: Version::new(version.to_string()).unwrap(),
        vendor: None,
        origin: None,
    }
}

pub fn scan(hostname: &str, at: Timestamp, packages: Vec<ObservedPackage>) -> ScanReport {
    ScanReport {
        hostname: hostname.to_string(),
        ip_address: "10.0.0.5".to_string(),
        operating_system: Some("Ubuntu 24.04".to_string()),
        os_family: None,
        architecture: Some("x86_64".to_string()),
        scanned_at: at,
        full_inventory: true,
        packages,
    }
}
