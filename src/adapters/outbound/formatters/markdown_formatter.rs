use crate::application::read_models::{HostView, InventoryReadModel, PackageView};
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use chrono::{DateTime, SecondsFormat, Utc};

/// Markdown table header for the package overview
const TABLE_HEADER: &str = "| Package | Ecosystem | Version | First Seen | Last Seen | Status |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|-----------|---------|------------|-----------|--------|\n";

/// MarkdownFormatter adapter for a human-readable host inventory report
///
/// Renders the host attributes, a package overview table and the
/// version history of every listed package.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_timestamp(at: DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn format_optional_timestamp(at: Option<DateTime<Utc>>) -> String {
        at.map(Self::format_timestamp)
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &InventoryReadModel) {
        output.push_str(&format!(
            "# Package Inventory: {}\n\n",
            Self::escape_markdown_table_cell(&model.host.hostname)
        ));
        output.push_str(&format!(
            "Generated by {} {} at {}",
            model.metadata.tool_name,
            model.metadata.tool_version,
            Self::format_timestamp(model.metadata.generated_at)
        ));
        if let Some(as_of) = model.metadata.as_of {
            output.push_str(&format!(
                ", showing versions installed at {}",
                Self::format_timestamp(as_of)
            ));
        }
        output.push_str(".\n\n");
    }

    fn render_host(&self, output: &mut String, host: &HostView) {
        output.push_str("## Host\n\n");
        output.push_str("| Attribute | Value |\n");
        output.push_str("|-----------|-------|\n");

        let rows = [
            ("IP address", host.ip_address.clone()),
            (
                "Operating system",
                host.operating_system.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ("OS family", host.os_family.clone()),
            (
                "Architecture",
                host.architecture.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ("Status", host.status.clone()),
            ("Network exposure", host.network_exposure.clone()),
            ("Last scan", Self::format_optional_timestamp(host.last_scan)),
        ];
        for (label, value) in rows {
            output.push_str(&format!(
                "| {} | {} |\n",
                label,
                Self::escape_markdown_table_cell(&value)
            ));
        }
        output.push('\n');
    }

    fn render_packages(&self, output: &mut String, model: &InventoryReadModel) {
        output.push_str("## Packages\n\n");
        if model.packages.is_empty() {
            output.push_str("No packages to report.\n\n");
            return;
        }

        output.push_str(&format!(
            "{} package(s) listed, {} currently installed.\n\n",
            model.packages.len(),
            model.active_package_count()
        ));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for package in &model.packages {
            let version = match model.metadata.as_of {
                Some(_) => package.version_as_of.as_deref(),
                None => package.current_version.as_deref(),
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&package.name),
                package.ecosystem,
                Self::escape_markdown_table_cell(version.unwrap_or("-")),
                Self::format_optional_timestamp(package.first_seen),
                Self::format_optional_timestamp(package.last_seen),
                if package.active { "installed" } else { "removed" }
            ));
        }
        output.push('\n');
    }

    fn render_history(&self, output: &mut String, packages: &[PackageView]) {
        let with_history: Vec<&PackageView> =
            packages.iter().filter(|p| p.intervals.len() > 1 || !p.active).collect();
        if with_history.is_empty() {
            return;
        }

        output.push_str("## Version History\n\n");
        for package in with_history {
            output.push_str(&format!(
                "### {} ({})\n\n",
                Self::escape_markdown_table_cell(&package.name),
                package.ecosystem
            ));
            for interval in &package.intervals {
                let end = match interval.removed_at {
                    Some(at) => Self::format_timestamp(at),
                    None => "present".to_string(),
                };
                output.push_str(&format!(
                    "- `{}`: {} to {} (last seen {})\n",
                    interval.version,
                    Self::format_timestamp(interval.first_detected),
                    end,
                    Self::format_timestamp(interval.last_detected)
                ));
            }
            output.push('\n');
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for MarkdownFormatter {
    fn format(&self, model: &InventoryReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_host(&mut output, &model.host);
        self.render_packages(&mut output, model);
        self.render_history(&mut output, &model.packages);

        Ok(output)
    }
}
