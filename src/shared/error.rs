use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use chrono::{DateTime, Utc};

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI systems to distinguish between
/// different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the scan was applied without conflicts
    Success = 0,
    /// The scan was applied but one or more package timelines rejected it
    ConflictsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, parse error, missing host, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConflictsDetected => write!(f, "Conflicts Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the package timeline core.
///
/// Both kinds indicate a defect upstream (misuse or mis-ordered scans) and
/// are never retried: repeating the call reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    /// An operation was invoked in a state that cannot produce a meaningful result.
    #[error("Invalid transition: {reason}")]
    InvalidTransition { reason: String },

    /// A new interval would overlap the period of a different version.
    #[error("Overlap violation: {reason}")]
    OverlapViolation { reason: String },
}

impl TimelineError {
    pub(crate) fn invalid_transition(reason: impl Into<String>) -> Self {
        TimelineError::InvalidTransition {
            reason: reason.into(),
        }
    }

    pub(crate) fn overlap(reason: impl Into<String>) -> Self {
        TimelineError::OverlapViolation {
            reason: reason.into(),
        }
    }
}

/// Application-specific errors for scan ingestion and inventory reporting.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping messages user-friendly with a hint line.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Scan report not found: {path}\n\n💡 Hint: Check the path passed to `scopeon ingest`")]
    ScanReportNotFound { path: PathBuf },

    #[error("Failed to parse scan report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the scan report is valid JSON in the documented format")]
    ScanReportParseError { path: PathBuf, details: String },

    #[error("Failed to read inventory store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the store directory exists and is readable")]
    StoreReadError { path: PathBuf, details: String },

    #[error("Failed to write inventory store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the store directory exists and you have write permissions")]
    StoreWriteError { path: PathBuf, details: String },

    #[error("Inventory store is corrupted: {path}\nDetails: {details}\n\n💡 Hint: Restore the file from a backup; timelines are never repaired automatically")]
    CorruptStore { path: PathBuf, details: String },

    #[error("Host not found in inventory: {hostname}\n\n💡 Hint: Run `scopeon hosts` to list known hosts")]
    HostNotFound { hostname: String },

    #[error("Package {name} ({ecosystem}) is already tracked on host {hostname}")]
    DuplicatePackage {
        hostname: String,
        name: String,
        ecosystem: String,
    },

    #[error("Package {name} ({ecosystem}) belongs to another host and cannot be attached to {hostname}")]
    ForeignTimeline {
        hostname: String,
        name: String,
        ecosystem: String,
    },

    #[error("Scan for host {hostname} at {scanned_at} is older than the last applied scan at {last_scan}\n\n💡 Hint: Scan reports must be ingested in chronological order")]
    OutOfOrderScan {
        hostname: String,
        scanned_at: DateTime<Utc>,
        last_scan: DateTime<Utc>,
    },

    #[error("Invalid hostname: {hostname}\nReason: {reason}")]
    InvalidHostname { hostname: String, reason: String },

    /// Validation error for request and report contents
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
