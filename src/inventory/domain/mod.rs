pub mod host;
pub mod host_classification;
pub mod package;
pub mod package_ecosystem;
pub mod package_timeline;
pub mod scan_report;
pub mod version_interval;

pub use host::Host;
pub use host_classification::{HostStatus, NetworkExposure, OsFamily};
pub use package::{PackageName, Version};
pub use package_ecosystem::PackageEcosystem;
pub use package_timeline::{Observation, PackageTimeline};
pub use scan_report::{ObservedPackage, ScanReport};
pub use version_interval::VersionInterval;

/// Every instant in the inventory is a UTC timestamp.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identity of the host that scopes a timeline.
pub type HostId = uuid::Uuid;
