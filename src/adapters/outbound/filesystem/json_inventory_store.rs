//! JSON file store for host inventories
//!
//! One document per host, named `<hostname>.json`, inside a store directory.
//! Documents are written to a temporary file in the same directory and then
//! renamed over the previous version, so a crash never leaves a half-written
//! host behind. Loading goes through the domain `restore` constructors, which
//! reject any document whose timelines break the interval invariants.

use crate::inventory::domain::{
    Host, HostId, HostStatus, NetworkExposure, OsFamily, PackageEcosystem, PackageName,
    PackageTimeline, Timestamp, Version, VersionInterval,
};
use crate::ports::outbound::InventoryRepository;
use crate::shared::error::InventoryError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use uuid::Uuid;

const STORE_FORMAT_VERSION: u32 = 1;
const MAX_HOSTNAME_LENGTH: usize = 253;

#[derive(Debug, Serialize, Deserialize)]
struct HostRecord {
    format_version: u32,
    id: HostId,
    hostname: String,
    ip_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operating_system: Option<String>,
    os_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    architecture: Option<String>,
    status: String,
    network_exposure: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_heartbeat: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_scan: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    technical_details: Option<serde_json::Value>,
    #[serde(default)]
    packages: Vec<TimelineRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TimelineRecord {
    id: Uuid,
    name: String,
    ecosystem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
    intervals: Vec<IntervalRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct IntervalRecord {
    version: String,
    first_detected: Timestamp,
    last_detected: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    removed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_not_detected: Option<Timestamp>,
}

impl From<&Host> for HostRecord {
    fn from(host: &Host) -> Self {
        Self {
            format_version: STORE_FORMAT_VERSION,
            id: host.id(),
            hostname: host.hostname().to_string(),
            ip_address: host.ip_address().to_string(),
            operating_system: host.operating_system().map(str::to_string),
            os_family: host.os_family().as_str().to_string(),
            architecture: host.architecture().map(str::to_string),
            status: host.status().as_str().to_string(),
            network_exposure: host.network_exposure().as_str().to_string(),
            last_heartbeat: host.last_heartbeat(),
            last_scan: host.last_scan(),
            created_at: host.created_at(),
            updated_at: host.updated_at(),
            technical_details: host.technical_details().cloned(),
            packages: host.packages().iter().map(TimelineRecord::from).collect(),
        }
    }
}

impl From<&PackageTimeline> for TimelineRecord {
    fn from(timeline: &PackageTimeline) -> Self {
        Self {
            id: timeline.id(),
            name: timeline.name().to_string(),
            ecosystem: timeline.ecosystem().as_str().to_string(),
            vendor: timeline.vendor().map(str::to_string),
            origin: timeline.origin().map(str::to_string),
            metadata: timeline.metadata().cloned(),
            intervals: timeline
                .history()
                .iter()
                .map(|interval| IntervalRecord {
                    version: interval.version().to_string(),
                    first_detected: interval.first_detected(),
                    last_detected: interval.last_detected(),
                    removed_at: interval.removed_at(),
                    first_not_detected: interval.first_not_detected(),
                })
                .collect(),
        }
    }
}

impl HostRecord {
    fn into_host(self) -> Result<Host> {
        if self.format_version != STORE_FORMAT_VERSION {
            anyhow::bail!(
                "unsupported store format version {} (expected {})",
                self.format_version,
                STORE_FORMAT_VERSION
            );
        }

        let mut host = Host::restore(
            self.id,
            self.hostname,
            self.ip_address,
            self.operating_system,
            OsFamily::from_value(&self.os_family),
            self.architecture,
            HostStatus::from_value(&self.status),
            NetworkExposure::from_value(&self.network_exposure),
            self.last_heartbeat,
            self.last_scan,
            self.created_at,
            self.updated_at,
            self.technical_details,
        );

        for record in self.packages {
            let timeline = record.into_timeline(host.id())?;
            host.add_package(timeline)?;
        }
        Ok(host)
    }
}

impl TimelineRecord {
    fn into_timeline(self, host: HostId) -> Result<PackageTimeline> {
        let name = PackageName::new(self.name)?;
        let intervals = self
            .intervals
            .into_iter()
            .map(|record| -> Result<VersionInterval> {
                Ok(VersionInterval::restore(
                    self.id,
                    Version::new(record.version)?,
                    record.first_detected,
                    record.last_detected,
                    record.removed_at,
                    record.first_not_detected,
                )?)
            })
            .collect::<Result<Vec<_>>>()?;

        let timeline = PackageTimeline::restore(
            self.id,
            host,
            name,
            PackageEcosystem::from_value(&self.ecosystem),
            self.vendor,
            self.origin,
            self.metadata,
            intervals,
        )?;
        Ok(timeline)
    }
}

/// Checks that a hostname can be used as a store file name.
pub fn validate_hostname(hostname: &str) -> std::result::Result<(), InventoryError> {
    let invalid = |reason: &str| InventoryError::InvalidHostname {
        hostname: hostname.to_string(),
        reason: reason.to_string(),
    };

    if hostname.is_empty() {
        return Err(invalid("hostname must not be empty"));
    }
    if hostname.len() > MAX_HOSTNAME_LENGTH {
        return Err(invalid("hostname is longer than 253 characters"));
    }
    if hostname.starts_with('.') {
        return Err(invalid("hostname must not start with '.'"));
    }
    if !hostname
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(invalid(
            "only ASCII letters, digits, '.', '-' and '_' are allowed",
        ));
    }
    Ok(())
}

/// JsonInventoryStore adapter persisting one JSON document per host
pub struct JsonInventoryStore {
    store_dir: PathBuf,
}

impl JsonInventoryStore {
    pub fn new(store_dir: PathBuf) -> Self {
        Self { store_dir }
    }

    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    fn host_path(&self, hostname: &str) -> Result<PathBuf> {
        validate_hostname(hostname)?;
        Ok(self.store_dir.join(format!("{}.json", hostname)))
    }
}

impl InventoryRepository for JsonInventoryStore {
    fn load_host(&self, hostname: &str) -> Result<Option<Host>> {
        let path = self.host_path(hostname)?;
        if !path.exists() {
            debug!(hostname, path = %path.display(), "host not in store");
            return Ok(None);
        }

        let content = read_regular_file(&path, "host inventory", MAX_FILE_SIZE).map_err(|e| {
            InventoryError::StoreReadError {
                path: path.clone(),
                details: e.to_string(),
            }
        })?;

        let record: HostRecord =
            serde_json::from_str(&content).map_err(|e| InventoryError::CorruptStore {
                path: path.clone(),
                details: e.to_string(),
            })?;
        if record.hostname != hostname {
            return Err(InventoryError::CorruptStore {
                path,
                details: format!(
                    "document belongs to host '{}', not '{}'",
                    record.hostname, hostname
                ),
            }
            .into());
        }

        let host = record
            .into_host()
            .map_err(|e| InventoryError::CorruptStore {
                path: path.clone(),
                details: e.to_string(),
            })?;
        debug!(hostname, packages = host.packages().len(), "host loaded");
        Ok(Some(host))
    }

    fn save_host(&self, host: &Host) -> Result<()> {
        let path = self.host_path(host.hostname())?;
        let write_error = |details: String| InventoryError::StoreWriteError {
            path: path.clone(),
            details,
        };

        fs::create_dir_all(&self.store_dir).map_err(|e| write_error(e.to_string()))?;
        let json = serde_json::to_string_pretty(&HostRecord::from(host))
            .map_err(|e| write_error(e.to_string()))?;

        let mut temp =
            NamedTempFile::new_in(&self.store_dir).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| write_error(e.to_string()))?;
        temp.persist(&path)
            .map_err(|e| write_error(e.error.to_string()))?;

        debug!(hostname = host.hostname(), path = %path.display(), "host saved");
        Ok(())
    }

    fn list_hostnames(&self) -> Result<Vec<String>> {
        if !self.store_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.store_dir).map_err(|e| InventoryError::StoreReadError {
            path: self.store_dir.clone(),
            details: e.to_string(),
        })?;

        let mut hostnames = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| InventoryError::StoreReadError {
                    path: self.store_dir.clone(),
                    details: e.to_string(),
                })?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if validate_hostname(stem).is_ok() {
                    hostnames.push(stem.to_string());
                }
            }
        }
        hostnames.sort();
        Ok(hostnames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use tempfile::TempDir;

    fn ts(day: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
    }

    fn sample_host() -> Host {
        let mut host = Host::new(
            "web-01".to_string(),
            "10.0.0.5".to_string(),
            Some("Debian 12".to_string()),
            Some(OsFamily::Debian),
            Some("x86_64".to_string()),
            Some(HostStatus::Active),
            Some(NetworkExposure::LanOnly),
        );
        let mut openssl = PackageTimeline::create(
            host.id(),
            PackageName::new("openssl".to_string()).unwrap(),
            PackageEcosystem::Deb,
            Some("Debian".to_string()),
            None,
            Version::new("3.0.1".to_string()).unwrap(),
            ts(1),
            None,
        );
        openssl
            .observe(Version::new("3.0.2".to_string()).unwrap(), ts(15), Some(ts(1)))
            .unwrap();
        host.add_package(openssl).unwrap();
        host.record_scan(ts(15));
        host
    }

    #[test]
    fn test_load_unknown_host_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonInventoryStore::new(dir.path().to_path_buf());

        assert!(store.load_host("web-01").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_preserves_timelines() {
        let dir = TempDir::new().unwrap();
        let store = JsonInventoryStore::new(dir.path().join("store"));
        let host = sample_host();

        store.save_host(&host).unwrap();
        let loaded = store.load_host("web-01").unwrap().unwrap();

        assert_eq!(loaded.id(), host.id());
        assert_eq!(loaded.status(), HostStatus::Active);
        assert_eq!(loaded.network_exposure(), NetworkExposure::LanOnly);
        assert_eq!(loaded.last_scan(), Some(ts(15)));
        let original = host.package("openssl", PackageEcosystem::Deb).unwrap();
        let restored = loaded.package("openssl", PackageEcosystem::Deb).unwrap();
        assert_eq!(restored.id(), original.id());
        assert_eq!(restored.history(), original.history());
        assert_eq!(restored.current_version().unwrap().as_str(), "3.0.2");
    }

    #[test]
    fn test_save_then_load_preserves_opaque_details() {
        let dir = TempDir::new().unwrap();
        let store = JsonInventoryStore::new(dir.path().to_path_buf());
        let mut host = sample_host();
        let details = serde_json::json!({"kernel": "6.1.0-18-amd64", "cpus": 4});
        let metadata = serde_json::json!({"cpe": "cpe:2.3:a:openssl:openssl:3.0.2"});
        host.set_technical_details(Some(details.clone()));
        host.record_heartbeat(ts(16));
        host.package_mut("openssl", PackageEcosystem::Deb)
            .unwrap()
            .set_metadata(Some(metadata.clone()));

        store.save_host(&host).unwrap();
        let loaded = store.load_host("web-01").unwrap().unwrap();

        assert_eq!(loaded.technical_details(), Some(&details));
        assert_eq!(loaded.last_heartbeat(), Some(ts(16)));
        let openssl = loaded.package("openssl", PackageEcosystem::Deb).unwrap();
        assert_eq!(openssl.metadata(), Some(&metadata));
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonInventoryStore::new(dir.path().to_path_buf());
        let mut host = sample_host();
        store.save_host(&host).unwrap();

        host.package_mut("openssl", PackageEcosystem::Deb)
            .unwrap()
            .remove(ts(20))
            .unwrap();
        store.save_host(&host).unwrap();

        let loaded = store.load_host("web-01").unwrap().unwrap();
        assert!(!loaded
            .package("openssl", PackageEcosystem::Deb)
            .unwrap()
            .is_active());
        // only the host document remains, no temporary files
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_overlapping_document_is_rejected_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = JsonInventoryStore::new(dir.path().to_path_buf());
        let host = sample_host();
        let mut record = HostRecord::from(&host);
        // reopen the closed 3.0.1 interval so two versions are active at once
        record.packages[0].intervals[0].removed_at = None;
        fs::write(
            dir.path().join("web-01.json"),
            serde_json::to_string(&record).unwrap(),
        )
        .unwrap();

        let err = store.load_host("web-01").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::CorruptStore { .. })
        ));
        assert!(err.to_string().contains("Overlap violation"));
    }

    #[test]
    fn test_invalid_json_is_corrupt() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("web-01.json"), "{").unwrap();
        let store = JsonInventoryStore::new(dir.path().to_path_buf());

        assert!(store.load_host("web-01").is_err());
    }

    #[test]
    fn test_list_hostnames_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let store = JsonInventoryStore::new(dir.path().to_path_buf());
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let mut second = Host::new(
            "app-02".to_string(),
            "10.0.0.6".to_string(),
            None,
            None,
            None,
            None,
            None,
        );
        second.record_scan(ts(2));

        store.save_host(&sample_host()).unwrap();
        store.save_host(&second).unwrap();

        assert_eq!(
            store.list_hostnames().unwrap(),
            vec!["app-02".to_string(), "web-01".to_string()]
        );
    }

    #[test]
    fn test_list_hostnames_without_store_dir() {
        let dir = TempDir::new().unwrap();
        let store = JsonInventoryStore::new(dir.path().join("missing"));

        assert!(store.list_hostnames().unwrap().is_empty());
    }

    #[rstest]
    #[case("web-01", true)]
    #[case("db.internal.example.com", true)]
    #[case("node_7", true)]
    #[case("", false)]
    #[case(".hidden", false)]
    #[case("../etc/passwd", false)]
    #[case("a/b", false)]
    #[case("host name", false)]
    fn test_validate_hostname(#[case] hostname: &str, #[case] valid: bool) {
        assert_eq!(validate_hostname(hostname).is_ok(), valid);
    }
}
