//! Package view struct for read model
//!
//! Flattens a package timeline into what a report needs to show.

use super::interval_view::IntervalView;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// View representation of a tracked package and its history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageView {
    pub name: String,
    pub ecosystem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Whether the package is currently installed
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    /// Version installed at the report's `as_of` instant, when one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_as_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    /// Installation periods in the order they were recorded
    pub intervals: Vec<IntervalView>,
}
