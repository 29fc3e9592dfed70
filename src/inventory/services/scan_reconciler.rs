use crate::inventory::domain::{
    Host, Observation, ObservedPackage, PackageEcosystem, PackageTimeline, ScanReport,
};
use crate::shared::error::{InventoryError, TimelineError};
use crate::shared::Result;
use std::collections::HashSet;
use tracing::{debug, warn};

/// A package whose timeline rejected this scan.
///
/// The timeline itself is unchanged; the rest of the scan was still applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub package: String,
    pub ecosystem: PackageEcosystem,
    pub error: TimelineError,
}

/// Counts of what one scan did to a host's timelines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileSummary {
    pub created: usize,
    pub extended: usize,
    pub transitioned: usize,
    pub reactivated: usize,
    pub removed: usize,
    pub conflicts: Vec<Conflict>,
}

impl ReconcileSummary {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Number of timelines whose state changed.
    pub fn changed(&self) -> usize {
        self.created + self.transitioned + self.reactivated + self.removed
    }
}

/// ScanReconciler - Applies scan snapshots to a host's package timelines
///
/// Each timeline is independent: a conflict on one package is recorded and
/// does not stop the others from being updated.
pub struct ScanReconciler;

impl ScanReconciler {
    /// Applies `report` to `host`.
    ///
    /// The host's previous `last_scan` becomes the `first_not_detected` hint
    /// of every interval opened by this scan.
    ///
    /// # Errors
    /// Returns an error, without touching the host, if:
    /// - The report is for a different hostname
    /// - The report is older than the host's last applied scan
    /// - The report lists the same (name, ecosystem) twice
    pub fn reconcile(host: &mut Host, report: &ScanReport) -> Result<ReconcileSummary> {
        Self::validate(host, report)?;

        let scanned_at = report.scanned_at;
        let previous_scan = host.last_scan();
        let mut summary = ReconcileSummary::default();

        for observed in &report.packages {
            Self::apply_observation(host, observed, report, &mut summary)?;
        }

        if report.full_inventory {
            let seen: HashSet<(&str, PackageEcosystem)> = report
                .packages
                .iter()
                .map(|p| (p.name.as_str(), p.ecosystem))
                .collect();

            for timeline in host.packages_mut() {
                if !timeline.is_active()
                    || seen.contains(&(timeline.name().as_str(), timeline.ecosystem()))
                {
                    continue;
                }
                match timeline.remove(scanned_at) {
                    Ok(_) => summary.removed += 1,
                    Err(error) => {
                        Self::record_conflict(&mut summary, timeline, error);
                    }
                }
            }
        }

        host.record_scan(scanned_at);
        debug!(
            hostname = host.hostname(),
            previous_scan = ?previous_scan,
            created = summary.created,
            removed = summary.removed,
            "scan reconciled"
        );
        Ok(summary)
    }

    fn validate(host: &Host, report: &ScanReport) -> Result<()> {
        if report.hostname != host.hostname() {
            return Err(InventoryError::Validation {
                message: format!(
                    "scan report for host '{}' cannot be applied to host '{}'",
                    report.hostname,
                    host.hostname()
                ),
            }
            .into());
        }

        if let Some(last_scan) = host.last_scan() {
            if report.scanned_at < last_scan {
                return Err(InventoryError::OutOfOrderScan {
                    hostname: host.hostname().to_string(),
                    scanned_at: report.scanned_at,
                    last_scan,
                }
                .into());
            }
        }

        let mut seen = HashSet::new();
        for package in &report.packages {
            if !seen.insert((package.name.as_str(), package.ecosystem)) {
                return Err(InventoryError::Validation {
                    message: format!(
                        "scan report lists {} ({}) more than once",
                        package.name, package.ecosystem
                    ),
                }
                .into());
            }
        }

        Ok(())
    }

    fn apply_observation(
        host: &mut Host,
        observed: &ObservedPackage,
        report: &ScanReport,
        summary: &mut ReconcileSummary,
    ) -> Result<()> {
        let first_not_detected = host.last_scan();
        let host_id = host.id();

        let Some(timeline) = host.package_mut(observed.name.as_str(), observed.ecosystem) else {
            let timeline = PackageTimeline::create(
                host_id,
                observed.name.clone(),
                observed.ecosystem,
                observed.vendor.clone(),
                observed.origin.clone(),
                observed.version.clone(),
                report.scanned_at,
                first_not_detected,
            );
            host.add_package(timeline)?;
            summary.created += 1;
            return Ok(());
        };

        match timeline.observe(
            observed.version.clone(),
            report.scanned_at,
            first_not_detected,
        ) {
            Ok(observation) => {
                timeline.update_source(observed.vendor.clone(), observed.origin.clone());
                match observation {
                    Observation::Extended => summary.extended += 1,
                    Observation::Transitioned { .. } => summary.transitioned += 1,
                    Observation::Reactivated => summary.reactivated += 1,
                }
            }
            Err(error) => Self::record_conflict(summary, timeline, error),
        }

        Ok(())
    }

    fn record_conflict(
        summary: &mut ReconcileSummary,
        timeline: &PackageTimeline,
        error: TimelineError,
    ) {
        warn!(
            package = %timeline.name(),
            ecosystem = %timeline.ecosystem(),
            error = %error,
            "timeline rejected scan observation"
        );
        summary.conflicts.push(Conflict {
            package: timeline.name().to_string(),
            ecosystem: timeline.ecosystem(),
            error,
        });
    }
}
