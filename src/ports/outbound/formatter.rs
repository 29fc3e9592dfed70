use crate::application::read_models::InventoryReadModel;
use crate::shared::Result;

/// InventoryFormatter port for rendering a host inventory report
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait InventoryFormatter {
    /// Formats the inventory read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &InventoryReadModel) -> Result<String>;
}
