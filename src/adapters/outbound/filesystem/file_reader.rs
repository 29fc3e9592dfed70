use crate::inventory::domain::{
    ObservedPackage, OsFamily, PackageEcosystem, PackageName, ScanReport, Timestamp, Version,
};
use crate::ports::outbound::ScanReportReader;
use crate::shared::error::InventoryError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// Wire shape of a scan report as produced by scan agents
#[derive(Debug, Deserialize)]
struct ScanReportDocument {
    hostname: String,
    ip_address: String,
    #[serde(default)]
    operating_system: Option<String>,
    #[serde(default)]
    os_family: Option<String>,
    #[serde(default)]
    architecture: Option<String>,
    scanned_at: Timestamp,
    #[serde(default = "default_full_inventory")]
    full_inventory: bool,
    #[serde(default)]
    packages: Vec<PackageEntry>,
}

#[derive(Debug, Deserialize)]
struct PackageEntry {
    name: String,
    ecosystem: String,
    version: String,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    origin: Option<String>,
}

fn default_full_inventory() -> bool {
    true
}

/// FileSystemReader adapter for reading scan reports from the file system
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(path: &Path, content: &str) -> Result<ScanReport> {
        let parse_error = |details: String| InventoryError::ScanReportParseError {
            path: path.to_path_buf(),
            details,
        };

        let document: ScanReportDocument =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        if document.hostname.trim().is_empty() {
            return Err(parse_error("hostname must not be empty".to_string()).into());
        }

        let packages = document
            .packages
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                Self::convert_package(entry)
                    .map_err(|e| parse_error(format!("packages[{}]: {}", index, e)))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ScanReport {
            hostname: document.hostname.trim().to_string(),
            ip_address: document.ip_address,
            operating_system: document.operating_system,
            os_family: document.os_family.as_deref().map(OsFamily::from_value),
            architecture: document.architecture,
            scanned_at: document.scanned_at,
            full_inventory: document.full_inventory,
            packages,
        })
    }

    fn convert_package(entry: PackageEntry) -> Result<ObservedPackage> {
        Ok(ObservedPackage {
            name: PackageName::new(entry.name)?,
            ecosystem: PackageEcosystem::from_value(&entry.ecosystem),
            version: Version::new(entry.version)?,
            vendor: entry.vendor,
            origin: entry.origin,
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanReportReader for FileSystemReader {
    fn read_scan_report(&self, path: &Path) -> Result<ScanReport> {
        if !path.exists() {
            return Err(InventoryError::ScanReportNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = read_regular_file(path, "scan report", MAX_FILE_SIZE)?;
        Self::parse(path, &content)
    }
}
