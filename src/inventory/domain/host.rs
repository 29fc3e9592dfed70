use super::{
    HostId, HostStatus, NetworkExposure, OsFamily, PackageEcosystem, PackageTimeline, Timestamp,
};
use crate::shared::error::InventoryError;
use chrono::Utc;
use uuid::Uuid;

/// A machine whose installed packages are tracked.
///
/// The host is a container: it owns one [`PackageTimeline`] per
/// (package name, ecosystem) and holds descriptive attributes. It has no
/// algorithm of its own beyond keeping that pair unique.
#[derive(Debug, Clone)]
pub struct Host {
    id: HostId,
    hostname: String,
    ip_address: String,
    operating_system: Option<String>,
    os_family: OsFamily,
    architecture: Option<String>,
    status: HostStatus,
    network_exposure: NetworkExposure,
    last_heartbeat: Option<Timestamp>,
    last_scan: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
    technical_details: Option<serde_json::Value>,
    packages: Vec<PackageTimeline>,
}

impl Host {
    pub fn new(
        hostname: String,
        ip_address: String,
        operating_system: Option<String>,
        os_family: Option<OsFamily>,
        architecture: Option<String>,
        status: Option<HostStatus>,
        network_exposure: Option<NetworkExposure>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            hostname,
            ip_address,
            operating_system,
            os_family: os_family.unwrap_or_default(),
            architecture,
            status: status.unwrap_or_default(),
            network_exposure: network_exposure.unwrap_or_default(),
            last_heartbeat: None,
            last_scan: None,
            created_at: now,
            updated_at: now,
            technical_details: None,
            packages: Vec::new(),
        }
    }

    /// Rebuilds a stored host. Package timelines are added afterwards with
    /// [`Host::add_package`] so the uniqueness rule still applies.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HostId,
        hostname: String,
        ip_address: String,
        operating_system: Option<String>,
        os_family: OsFamily,
        architecture: Option<String>,
        status: HostStatus,
        network_exposure: NetworkExposure,
        last_heartbeat: Option<Timestamp>,
        last_scan: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
        technical_details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            id,
            hostname,
            ip_address,
            operating_system,
            os_family,
            architecture,
            status,
            network_exposure,
            last_heartbeat,
            last_scan,
            created_at,
            updated_at,
            technical_details,
            packages: Vec::new(),
        }
    }

    /// Takes ownership of a timeline.
    ///
    /// # Errors
    /// `ForeignTimeline` if the timeline was created for another host,
    /// `DuplicatePackage` if the (name, ecosystem) pair is already tracked here.
    pub fn add_package(&mut self, timeline: PackageTimeline) -> Result<(), InventoryError> {
        if timeline.host() != self.id {
            return Err(InventoryError::ForeignTimeline {
                hostname: self.hostname.clone(),
                name: timeline.name().to_string(),
                ecosystem: timeline.ecosystem().to_string(),
            });
        }

        if self
            .package(timeline.name().as_str(), timeline.ecosystem())
            .is_some()
        {
            return Err(InventoryError::DuplicatePackage {
                hostname: self.hostname.clone(),
                name: timeline.name().to_string(),
                ecosystem: timeline.ecosystem().to_string(),
            });
        }

        self.packages.push(timeline);
        Ok(())
    }

    pub fn package(&self, name: &str, ecosystem: PackageEcosystem) -> Option<&PackageTimeline> {
        self.packages
            .iter()
            .find(|p| p.name().as_str() == name && p.ecosystem() == ecosystem)
    }

    pub fn package_mut(
        &mut self,
        name: &str,
        ecosystem: PackageEcosystem,
    ) -> Option<&mut PackageTimeline> {
        self.packages
            .iter_mut()
            .find(|p| p.name().as_str() == name && p.ecosystem() == ecosystem)
    }

    pub fn packages(&self) -> &[PackageTimeline] {
        &self.packages
    }

    pub(crate) fn packages_mut(&mut self) -> impl Iterator<Item = &mut PackageTimeline> {
        self.packages.iter_mut()
    }

    pub fn active_packages(&self) -> impl Iterator<Item = &PackageTimeline> {
        self.packages.iter().filter(|p| p.is_active())
    }

    pub fn record_scan(&mut self, at: Timestamp) {
        self.last_scan = Some(at);
        self.touch();
    }

    pub fn record_heartbeat(&mut self, at: Timestamp) {
        self.last_heartbeat = Some(at);
        self.touch();
    }

    /// Refreshes the attributes a scan agent reports about the machine.
    pub fn update_details(
        &mut self,
        ip_address: String,
        operating_system: Option<String>,
        os_family: Option<OsFamily>,
        architecture: Option<String>,
    ) {
        self.ip_address = ip_address;
        if operating_system.is_some() {
            self.operating_system = operating_system;
        }
        if let Some(os_family) = os_family {
            self.os_family = os_family;
        }
        if architecture.is_some() {
            self.architecture = architecture;
        }
        self.touch();
    }

    pub fn set_status(&mut self, status: HostStatus) {
        self.status = status;
        self.touch();
    }

    pub fn set_network_exposure(&mut self, network_exposure: NetworkExposure) {
        self.network_exposure = network_exposure;
        self.touch();
    }

    pub fn set_technical_details(&mut self, details: Option<serde_json::Value>) {
        self.technical_details = details;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> HostId {
        self.id
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn operating_system(&self) -> Option<&str> {
        self.operating_system.as_deref()
    }

    pub fn os_family(&self) -> OsFamily {
        self.os_family
    }

    pub fn architecture(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    pub fn status(&self) -> HostStatus {
        self.status
    }

    pub fn network_exposure(&self) -> NetworkExposure {
        self.network_exposure
    }

    pub fn last_heartbeat(&self) -> Option<Timestamp> {
        self.last_heartbeat
    }

    pub fn last_scan(&self) -> Option<Timestamp> {
        self.last_scan
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn technical_details(&self) -> Option<&serde_json::Value> {
        self.technical_details.as_ref()
    }
}
