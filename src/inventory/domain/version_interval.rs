use super::{Timestamp, Version};
use crate::shared::error::TimelineError;
use uuid::Uuid;

/// One contiguous period during which a single version was observed installed.
///
/// An interval is *open* while `removed_at` is `None`. Once closed it never
/// changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInterval {
    id: String,
    version: Version,
    first_detected: Timestamp,
    last_detected: Timestamp,
    removed_at: Option<Timestamp>,
    first_not_detected: Option<Timestamp>,
}

impl VersionInterval {
    /// Starts a new open interval.
    ///
    /// # Arguments
    /// * `timeline_id` - Identity of the owning timeline, used to derive the interval id
    /// * `version` - The observed version
    /// * `detected_at` - First observation; also the initial `last_detected`
    /// * `first_not_detected` - Latest instant the version was known to be absent
    pub fn open(
        timeline_id: Uuid,
        version: Version,
        detected_at: Timestamp,
        first_not_detected: Option<Timestamp>,
    ) -> Self {
        Self {
            id: Self::derive_id(timeline_id, &version, detected_at),
            version,
            first_detected: detected_at,
            last_detected: detected_at,
            removed_at: None,
            first_not_detected,
        }
    }

    /// Rebuilds a stored interval.
    ///
    /// # Errors
    /// `InvalidTransition` if `removed_at` precedes `first_detected`.
    pub fn restore(
        timeline_id: Uuid,
        version: Version,
        first_detected: Timestamp,
        last_detected: Timestamp,
        removed_at: Option<Timestamp>,
        first_not_detected: Option<Timestamp>,
    ) -> Result<Self, TimelineError> {
        if let Some(end) = removed_at {
            if end < first_detected {
                return Err(TimelineError::invalid_transition(format!(
                    "interval for version {} ends at {} before it starts at {}",
                    version, end, first_detected
                )));
            }
        }

        Ok(Self {
            id: Self::derive_id(timeline_id, &version, first_detected),
            version,
            first_detected,
            last_detected,
            removed_at,
            first_not_detected,
        })
    }

    // Same (timeline, version, first_detected) always yields the same id.
    fn derive_id(timeline_id: Uuid, version: &Version, first_detected: Timestamp) -> String {
        format!(
            "{}:{}:{}",
            timeline_id,
            version,
            first_detected.timestamp_millis()
        )
    }

    /// Ends the interval at `at`.
    ///
    /// # Errors
    /// `InvalidTransition` if the interval is already closed or `at` is
    /// earlier than `first_detected`. The interval is unchanged on error.
    pub fn close(&mut self, at: Timestamp) -> Result<(), TimelineError> {
        if let Some(removed_at) = self.removed_at {
            return Err(TimelineError::invalid_transition(format!(
                "version {} was already closed at {}",
                self.version, removed_at
            )));
        }
        if at < self.first_detected {
            return Err(TimelineError::invalid_transition(format!(
                "cannot close version {} at {}: it was first detected at {}",
                self.version, at, self.first_detected
            )));
        }

        self.removed_at = Some(at);
        Ok(())
    }

    /// Records a confirming observation of an open interval.
    ///
    /// # Errors
    /// `InvalidTransition` if the interval is closed.
    pub fn touch(&mut self, at: Timestamp) -> Result<(), TimelineError> {
        if let Some(removed_at) = self.removed_at {
            return Err(TimelineError::invalid_transition(format!(
                "cannot confirm version {}: it was closed at {}",
                self.version, removed_at
            )));
        }

        self.last_detected = at;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.removed_at.is_none()
    }

    /// Whether `at` falls within `[first_detected, removed_at)`.
    pub fn covers(&self, at: Timestamp) -> bool {
        at >= self.first_detected && self.removed_at.is_none_or(|end| at < end)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn first_detected(&self) -> Timestamp {
        self.first_detected
    }

    pub fn last_detected(&self) -> Timestamp {
        self.last_detected
    }

    pub fn removed_at(&self) -> Option<Timestamp> {
        self.removed_at
    }

    pub fn first_not_detected(&self) -> Option<Timestamp> {
        self.first_not_detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(day: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
    }

    fn version(v: &str) -> Version {
        Version::new(v.to_string()).unwrap()
    }

    #[test]
    fn test_open_interval() {
        let interval = VersionInterval::open(Uuid::nil(), version("1.0"), ts(1), Some(ts(1)));

        assert!(interval.is_open());
        assert_eq!(interval.first_detected(), ts(1));
        assert_eq!(interval.last_detected(), ts(1));
        assert_eq!(interval.first_not_detected(), Some(ts(1)));
        assert!(interval.removed_at().is_none());
    }

    #[test]
    fn test_id_is_deterministic() {
        let id = Uuid::new_v4();
        let a = VersionInterval::open(id, version("1.0"), ts(1), None);
        let b = VersionInterval::open(id, version("1.0"), ts(1), Some(ts(1)));
        let c = VersionInterval::open(id, version("1.0"), ts(2), None);

        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
        assert!(a.id().starts_with(&id.to_string()));
        assert!(a.id().contains(":1.0:"));
    }

    #[test]
    fn test_close_sets_removed_at() {
        let mut interval = VersionInterval::open(Uuid::nil(), version("1.0"), ts(1), None);
        interval.close(ts(15)).unwrap();

        assert!(!interval.is_open());
        assert_eq!(interval.removed_at(), Some(ts(15)));
    }

    #[test]
    fn test_close_twice_is_invalid_transition() {
        let mut interval = VersionInterval::open(Uuid::nil(), version("1.0"), ts(1), None);
        interval.close(ts(15)).unwrap();

        let err = interval.close(ts(20)).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidTransition { .. }));
        assert_eq!(interval.removed_at(), Some(ts(15)));
    }

    #[test]
    fn test_close_before_start_is_invalid_transition() {
        let mut interval = VersionInterval::open(Uuid::nil(), version("1.0"), ts(10), None);

        let err = interval.close(ts(5)).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidTransition { .. }));
        assert!(interval.is_open());
    }

    #[test]
    fn test_close_at_start_is_allowed() {
        let mut interval = VersionInterval::open(Uuid::nil(), version("1.0"), ts(10), None);
        assert!(interval.close(ts(10)).is_ok());
    }

    #[test]
    fn test_touch_updates_last_detected() {
        let mut interval = VersionInterval::open(Uuid::nil(), version("1.0"), ts(1), None);
        interval.touch(ts(15)).unwrap();

        assert_eq!(interval.last_detected(), ts(15));
        assert_eq!(interval.first_detected(), ts(1));
        assert!(interval.is_open());
    }

    #[test]
    fn test_touch_closed_interval_is_invalid_transition() {
        let mut interval = VersionInterval::open(Uuid::nil(), version("1.0"), ts(1), None);
        interval.close(ts(10)).unwrap();

        let err = interval.touch(ts(15)).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidTransition { .. }));
        assert_eq!(interval.last_detected(), ts(1));
    }

    #[test]
    fn test_covers_is_half_open() {
        let mut interval = VersionInterval::open(Uuid::nil(), version("1.0"), ts(5), None);
        assert!(!interval.covers(ts(4)));
        assert!(interval.covers(ts(5)));
        assert!(interval.covers(ts(30)));

        interval.close(ts(10)).unwrap();
        assert!(interval.covers(ts(9)));
        assert!(!interval.covers(ts(10)));
    }

    #[test]
    fn test_restore_rejects_inverted_period() {
        let err = VersionInterval::restore(
            Uuid::nil(),
            version("1.0"),
            ts(10),
            ts(10),
            Some(ts(2)),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, TimelineError::InvalidTransition { .. }));
    }

    #[test]
    fn test_restore_keeps_fields() {
        let interval = VersionInterval::restore(
            Uuid::nil(),
            version("2.0"),
            ts(1),
            ts(7),
            Some(ts(9)),
            Some(ts(1)),
        )
        .unwrap();

        assert_eq!(interval.version().as_str(), "2.0");
        assert_eq!(interval.last_detected(), ts(7));
        assert_eq!(interval.removed_at(), Some(ts(9)));
    }
}
