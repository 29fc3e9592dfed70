//! Classification enums describing a host.
//!
//! These are plain value holders. Each parses leniently from its wire value
//! and falls back to `Unknown`.

use std::fmt;

/// Operating system family, grouped by package management strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OsFamily {
    /// Debian-based distributions (Ubuntu, Debian, Mint, etc.)
    Debian,
    /// RPM-based distributions (RHEL, Fedora, CentOS, Rocky, Alma, etc.)
    Rpm,
    MacOs,
    Windows,
    /// Alpine Linux (apk-based)
    Alpine,
    /// Arch Linux and derivatives (pacman-based)
    Arch,
    LinuxOther,
    #[default]
    Unknown,
}

impl OsFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Debian => "debian",
            OsFamily::Rpm => "rpm",
            OsFamily::MacOs => "macos",
            OsFamily::Windows => "windows",
            OsFamily::Alpine => "alpine",
            OsFamily::Arch => "arch",
            OsFamily::LinuxOther => "linux_other",
            OsFamily::Unknown => "unknown",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "debian" => OsFamily::Debian,
            "rpm" => OsFamily::Rpm,
            "macos" => OsFamily::MacOs,
            "windows" => OsFamily::Windows,
            "alpine" => OsFamily::Alpine,
            "arch" => OsFamily::Arch,
            "linux_other" => OsFamily::LinuxOther,
            _ => OsFamily::Unknown,
        }
    }
}

/// Lifecycle and operational status of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostStatus {
    /// Reporting and available for scans
    Active,
    /// No recent heartbeat, but still managed
    Idle,
    Offline,
    /// Isolated for testing or analysis
    Sandboxed,
    /// Isolated by security policy
    Quarantined,
    Decommissioning,
    /// Historical record only
    Removed,
    #[default]
    Unknown,
}

impl HostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostStatus::Active => "active",
            HostStatus::Idle => "idle",
            HostStatus::Offline => "offline",
            HostStatus::Sandboxed => "sandboxed",
            HostStatus::Quarantined => "quarantined",
            HostStatus::Decommissioning => "decommissioning",
            HostStatus::Removed => "removed",
            HostStatus::Unknown => "unknown",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => HostStatus::Active,
            "idle" => HostStatus::Idle,
            "offline" => HostStatus::Offline,
            "sandboxed" => HostStatus::Sandboxed,
            "quarantined" => HostStatus::Quarantined,
            "decommissioning" => HostStatus::Decommissioning,
            "removed" => HostStatus::Removed,
            _ => HostStatus::Unknown,
        }
    }
}

/// Network reachability of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkExposure {
    ContainerOnly,
    LanOnly,
    InternetExposed,
    VpnRestricted,
    #[default]
    Unknown,
}

impl NetworkExposure {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkExposure::ContainerOnly => "container_only",
            NetworkExposure::LanOnly => "lan_only",
            NetworkExposure::InternetExposed => "internet_exposed",
            NetworkExposure::VpnRestricted => "vpn_restricted",
            NetworkExposure::Unknown => "unknown",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "container_only" => NetworkExposure::ContainerOnly,
            "lan_only" => NetworkExposure::LanOnly,
            "internet_exposed" => NetworkExposure::InternetExposed,
            "vpn_restricted" => NetworkExposure::VpnRestricted,
            _ => NetworkExposure::Unknown,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NetworkExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
