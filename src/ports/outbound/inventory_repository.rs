use crate::inventory::domain::Host;
use crate::shared::Result;

/// InventoryRepository port for loading and storing hosts with their timelines
///
/// The inventory core never persists anything itself; adapters behind this
/// port hand it fully materialized hosts and take them back after a scan.
pub trait InventoryRepository {
    /// Loads a host and all of its package timelines
    ///
    /// # Returns
    /// `None` if the host has never been stored
    ///
    /// # Errors
    /// Returns an error if the stored data cannot be read, or if it violates
    /// the timeline invariants
    fn load_host(&self, hostname: &str) -> Result<Option<Host>>;

    /// Stores a host, replacing any previous version atomically
    fn save_host(&self, host: &Host) -> Result<()>;

    /// Lists the hostnames known to the store, sorted
    fn list_hostnames(&self) -> Result<Vec<String>>;
}
