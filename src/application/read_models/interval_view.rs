//! Interval view struct for read model

use chrono::{DateTime, Utc};
use serde::Serialize;

/// View representation of one installation period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalView {
    pub id: String,
    pub version: String,
    pub first_detected: DateTime<Utc>,
    pub last_detected: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_not_detected: Option<DateTime<Utc>>,
}

impl IntervalView {
    pub fn is_open(&self) -> bool {
        self.removed_at.is_none()
    }
}
