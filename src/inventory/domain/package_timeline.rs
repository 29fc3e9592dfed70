use super::{HostId, PackageEcosystem, PackageName, Timestamp, Version, VersionInterval};
use crate::shared::error::TimelineError;
use tracing::debug;
use uuid::Uuid;

/// What a successful [`PackageTimeline::observe`] did to the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// Same version as the open interval; only `last_detected` moved.
    Extended,
    /// A different version replaced the open one (upgrade or downgrade).
    Transitioned { from: Version },
    /// The package had no open interval and is installed again.
    Reactivated,
}

/// Installation history of one package on one host.
///
/// The timeline owns an append-only list of [`VersionInterval`]s and is their
/// only writer. At most one interval is open at any time, and intervals of
/// different versions never overlap.
#[derive(Debug, Clone)]
pub struct PackageTimeline {
    id: Uuid,
    host: HostId,
    name: PackageName,
    ecosystem: PackageEcosystem,
    vendor: Option<String>,
    origin: Option<String>,
    metadata: Option<serde_json::Value>,
    intervals: Vec<VersionInterval>,
    open_index: Option<usize>,
}

impl PackageTimeline {
    /// Starts tracking a package first observed at `observed_at`.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        host: HostId,
        name: PackageName,
        ecosystem: PackageEcosystem,
        vendor: Option<String>,
        origin: Option<String>,
        version: Version,
        observed_at: Timestamp,
        first_not_detected: Option<Timestamp>,
    ) -> Self {
        let id = Uuid::new_v4();
        debug!(package = %name, %ecosystem, %version, at = %observed_at, "package first detected");

        Self {
            id,
            host,
            name,
            ecosystem,
            vendor,
            origin,
            metadata: None,
            intervals: vec![VersionInterval::open(
                id,
                version,
                observed_at,
                first_not_detected,
            )],
            open_index: Some(0),
        }
    }

    /// Rebuilds a timeline that was materialized elsewhere (e.g. loaded from a store).
    ///
    /// # Errors
    /// * `InvalidTransition` if `intervals` is empty
    /// * `OverlapViolation` if more than one interval is open, or two intervals
    ///   of different versions overlap
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        host: HostId,
        name: PackageName,
        ecosystem: PackageEcosystem,
        vendor: Option<String>,
        origin: Option<String>,
        metadata: Option<serde_json::Value>,
        intervals: Vec<VersionInterval>,
    ) -> Result<Self, TimelineError> {
        if intervals.is_empty() {
            return Err(TimelineError::invalid_transition(format!(
                "timeline for {} has no intervals",
                name
            )));
        }

        let mut open_index = None;
        for (index, interval) in intervals.iter().enumerate() {
            if !interval.is_open() {
                continue;
            }
            if let Some(previous) = open_index {
                let previous: &VersionInterval = &intervals[previous];
                return Err(TimelineError::overlap(format!(
                    "versions {} and {} of {} are both still active",
                    previous.version(),
                    interval.version(),
                    name
                )));
            }
            open_index = Some(index);
        }

        for (i, a) in intervals.iter().enumerate() {
            for b in &intervals[i + 1..] {
                if a.version() != b.version() && periods_overlap(a, b) {
                    return Err(TimelineError::overlap(format!(
                        "version {} (from {}) overlaps with version {} (from {})",
                        b.version(),
                        b.first_detected(),
                        a.version(),
                        a.first_detected()
                    )));
                }
            }
        }

        Ok(Self {
            id,
            host,
            name,
            ecosystem,
            vendor,
            origin,
            metadata,
            intervals,
            open_index,
        })
    }

    /// Applies one scan observation: rescan, upgrade, downgrade or reinstall.
    ///
    /// The timeline is left exactly as it was when an error is returned.
    ///
    /// # Errors
    /// * `OverlapViolation` if the new interval would start before a
    ///   different version's interval ended
    /// * `InvalidTransition` if `observed_at` precedes the start of the
    ///   interval it would close
    pub fn observe(
        &mut self,
        version: Version,
        observed_at: Timestamp,
        first_not_detected: Option<Timestamp>,
    ) -> Result<Observation, TimelineError> {
        let Some(current) = self.open_index else {
            self.append_interval(version, observed_at, first_not_detected, None)?;
            debug!(package = %self.name, at = %observed_at, "package reactivated");
            return Ok(Observation::Reactivated);
        };

        if self.intervals[current].version() == &version {
            self.intervals[current].touch(observed_at)?;
            return Ok(Observation::Extended);
        }

        let from = self.intervals[current].version().clone();
        self.append_interval(version, observed_at, first_not_detected, Some(current))?;
        debug!(package = %self.name, %from, at = %observed_at, "package version changed");
        Ok(Observation::Transitioned { from })
    }

    /// Marks the package as no longer installed.
    ///
    /// Returns `true` if an open interval was closed, `false` if the package
    /// was already inactive.
    pub fn remove(&mut self, observed_at: Timestamp) -> Result<bool, TimelineError> {
        let Some(current) = self.open_index else {
            return Ok(false);
        };

        self.intervals[current].close(observed_at)?;
        self.open_index = None;
        debug!(package = %self.name, at = %observed_at, "package removed");
        Ok(true)
    }

    // The only path that appends. Everything is validated before the first write.
    fn append_interval(
        &mut self,
        version: Version,
        observed_at: Timestamp,
        first_not_detected: Option<Timestamp>,
        closing: Option<usize>,
    ) -> Result<(), TimelineError> {
        validate_no_overlap(&self.intervals, closing, &version, observed_at)?;

        if let Some(index) = closing {
            self.intervals[index].close(observed_at)?;
        }

        self.intervals.push(VersionInterval::open(
            self.id,
            version,
            observed_at,
            first_not_detected,
        ));
        self.open_index = Some(self.intervals.len() - 1);
        Ok(())
    }

    pub fn current_version(&self) -> Option<&Version> {
        self.current_interval().map(VersionInterval::version)
    }

    pub fn current_interval(&self) -> Option<&VersionInterval> {
        self.open_index.map(|index| &self.intervals[index])
    }

    pub fn is_active(&self) -> bool {
        self.open_index.is_some()
    }

    /// Full interval history in insertion order.
    pub fn history(&self) -> &[VersionInterval] {
        &self.intervals
    }

    /// Version that was installed at `at`, if any.
    pub fn version_at(&self, at: Timestamp) -> Option<&Version> {
        self.intervals
            .iter()
            .rev()
            .find(|interval| interval.covers(at))
            .map(VersionInterval::version)
    }

    pub fn first_seen(&self) -> Option<Timestamp> {
        self.intervals.iter().map(|i| i.first_detected()).min()
    }

    /// Latest confirming observation of any version.
    pub fn last_seen(&self) -> Option<Timestamp> {
        self.intervals.iter().map(|i| i.last_detected()).max()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn host(&self) -> HostId {
        self.host
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn ecosystem(&self) -> PackageEcosystem {
        self.ecosystem
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, metadata: Option<serde_json::Value>) {
        self.metadata = metadata;
    }

    /// Refreshes descriptive attributes reported by a newer scan.
    pub fn update_source(&mut self, vendor: Option<String>, origin: Option<String>) {
        if vendor.is_some() {
            self.vendor = vendor;
        }
        if origin.is_some() {
            self.origin = origin;
        }
    }
}

/// Checks that an interval for `version` may start at `starts_at`.
///
/// `closing` is the open interval that the caller is about to end at
/// `starts_at`; it is skipped. Intervals sharing the new version's exact
/// string are exempt from the overlap rule.
fn validate_no_overlap(
    intervals: &[VersionInterval],
    closing: Option<usize>,
    version: &Version,
    starts_at: Timestamp,
) -> Result<(), TimelineError> {
    for (index, existing) in intervals.iter().enumerate() {
        if Some(index) == closing {
            continue;
        }

        if existing.version() == version {
            if existing.first_detected() == starts_at {
                return Err(TimelineError::overlap(format!(
                    "cannot add version {} at {}: an interval for it already starts at that instant",
                    version, starts_at
                )));
            }
            continue;
        }

        match existing.removed_at() {
            None => {
                return Err(TimelineError::overlap(format!(
                    "cannot add version {} at {}: version {} is still active (not removed)",
                    version,
                    starts_at,
                    existing.version()
                )));
            }
            Some(end) if starts_at < end => {
                return Err(TimelineError::overlap(format!(
                    "cannot add version {} at {}: overlaps with version {} (installed {} - {})",
                    version,
                    starts_at,
                    existing.version(),
                    existing.first_detected(),
                    end
                )));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

// Half-open periods; an open interval extends forever.
fn periods_overlap(a: &VersionInterval, b: &VersionInterval) -> bool {
    let a_before_b_ends = b.removed_at().is_none_or(|end| a.first_detected() < end);
    let b_before_a_ends = a.removed_at().is_none_or(|end| b.first_detected() < end);
    a_before_b_ends && b_before_a_ends
}
