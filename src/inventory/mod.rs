/// Inventory core - package timelines, hosts and scan reconciliation
///
/// `domain` holds the entities and their invariants; `services` applies
/// scan snapshots to them. Nothing in this module performs I/O.
pub mod domain;
pub mod services;
