//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a host inventory for reporting.

pub mod interval_view;
pub mod inventory_read_model;
pub mod inventory_read_model_builder;
pub mod package_view;

pub use interval_view::IntervalView;
pub use inventory_read_model::{HostView, InventoryReadModel, ReportMetadataView};
pub use inventory_read_model_builder::InventoryReadModelBuilder;
pub use package_view::PackageView;
