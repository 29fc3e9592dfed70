mod scan_reconciler;

pub use scan_reconciler::{Conflict, ReconcileSummary, ScanReconciler};
