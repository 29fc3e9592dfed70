use crate::inventory::domain::Timestamp;

/// ReportRequest - Internal request DTO for the inventory report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub hostname: String,
    /// List removed packages as well as installed ones
    pub include_inactive: bool,
    /// Resolve versions at this instant instead of now
    pub as_of: Option<Timestamp>,
}

impl ReportRequest {
    pub fn new(hostname: String, include_inactive: bool, as_of: Option<Timestamp>) -> Self {
        Self {
            hostname,
            include_inactive,
            as_of,
        }
    }
}
