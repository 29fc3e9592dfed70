//! Builder for constructing InventoryReadModel from domain objects
//!
//! This module provides the builder that transforms a host aggregate into
//! the query-optimized read model.

use super::interval_view::IntervalView;
use super::inventory_read_model::{HostView, InventoryReadModel, ReportMetadataView};
use super::package_view::PackageView;
use crate::inventory::domain::{Host, PackageTimeline, Timestamp};
use chrono::Utc;

/// Builder for constructing InventoryReadModel from domain objects
pub struct InventoryReadModelBuilder;

impl InventoryReadModelBuilder {
    /// Builds an InventoryReadModel from a host
    ///
    /// # Arguments
    /// * `host` - The host aggregate with its package timelines
    /// * `include_inactive` - Whether removed packages are listed
    /// * `as_of` - Optional instant to resolve installed versions at
    ///
    /// When `as_of` is given, "inactive" means "not installed at that
    /// instant" rather than "not installed now". Packages are sorted by
    /// ecosystem then name.
    pub fn build(host: &Host, include_inactive: bool, as_of: Option<Timestamp>) -> InventoryReadModel {
        let mut packages: Vec<PackageView> = host
            .packages()
            .iter()
            .filter(|timeline| include_inactive || Self::is_installed(timeline, as_of))
            .map(|timeline| Self::build_package(timeline, as_of))
            .collect();
        packages.sort_by(|a, b| (&a.ecosystem, &a.name).cmp(&(&b.ecosystem, &b.name)));

        InventoryReadModel {
            metadata: Self::build_metadata(as_of),
            host: Self::build_host(host),
            packages,
        }
    }

    fn is_installed(timeline: &PackageTimeline, as_of: Option<Timestamp>) -> bool {
        match as_of {
            Some(at) => timeline.version_at(at).is_some(),
            None => timeline.is_active(),
        }
    }

    fn build_metadata(as_of: Option<Timestamp>) -> ReportMetadataView {
        ReportMetadataView {
            generated_at: Utc::now(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            as_of,
        }
    }

    fn build_host(host: &Host) -> HostView {
        HostView {
            id: host.id().to_string(),
            hostname: host.hostname().to_string(),
            ip_address: host.ip_address().to_string(),
            operating_system: host.operating_system().map(str::to_string),
            os_family: host.os_family().to_string(),
            architecture: host.architecture().map(str::to_string),
            status: host.status().to_string(),
            network_exposure: host.network_exposure().to_string(),
            last_scan: host.last_scan(),
        }
    }

    fn build_package(timeline: &PackageTimeline, as_of: Option<Timestamp>) -> PackageView {
        let intervals = timeline
            .history()
            .iter()
            .map(|interval| IntervalView {
                id: interval.id().to_string(),
                version: interval.version().to_string(),
                first_detected: interval.first_detected(),
                last_detected: interval.last_detected(),
                removed_at: interval.removed_at(),
                first_not_detected: interval.first_not_detected(),
            })
            .collect();

        PackageView {
            name: timeline.name().to_string(),
            ecosystem: timeline.ecosystem().to_string(),
            vendor: timeline.vendor().map(str::to_string),
            origin: timeline.origin().map(str::to_string),
            active: timeline.is_active(),
            current_version: timeline.current_version().map(|v| v.to_string()),
            version_as_of: as_of
                .and_then(|at| timeline.version_at(at))
                .map(|v| v.to_string()),
            first_seen: timeline.first_seen(),
            last_seen: timeline.last_seen(),
            intervals,
        }
    }
}
