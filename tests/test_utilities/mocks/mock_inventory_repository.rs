use scopeon_inventory::prelude::*;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory InventoryRepository; clones share the same storage
#[derive(Default, Clone)]
pub struct MockInventoryRepository {
    hosts: Arc<Mutex<BTreeMap<String, Host>>>,
    fail_on_save: bool,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose writes always fail
    pub fn failing_on_save() -> Self {
        Self {
            fail_on_save: true,
            ..Self::default()
        }
    }

    pub fn with_host(self, host: Host) -> Self {
        self.hosts
            .lock()
            .unwrap()
            .insert(host.hostname().to_string(), host);
        self
    }

    pub fn get(&self, hostname: &str) -> Option<Host> {
        self.hosts.lock().unwrap().get(hostname).cloned()
    }

    pub fn host_count(&self) -> usize {
        self.hosts.lock().unwrap().len()
    }
}

impl InventoryRepository for MockInventoryRepository {
    fn load_host(&self, hostname: &str) -> Result<Option<Host>> {
        Ok(self.get(hostname))
    }

    fn save_host(&self, host: &Host) -> Result<()> {
        if self.fail_on_save {
            anyhow::bail!("mock store is read-only");
        }
        self.hosts
            .lock()
            .unwrap()
            .insert(host.hostname().to_string(), host.clone());
        Ok(())
    }

    fn list_hostnames(&self) -> Result<Vec<String>> {
        Ok(self.hosts.lock().unwrap().keys().cloned().collect())
    }
}
