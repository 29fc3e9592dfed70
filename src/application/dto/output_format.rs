use std::fmt;
use std::str::FromStr;

/// Rendering of an inventory report.
///
/// Shared by the CLI, the config file and the formatter factory, so it
/// lives in the application layer rather than in any one adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Machine-readable read model
    #[default]
    Json,
    /// Tables and version history for people
    Markdown,
}

impl OutputFormat {
    const ACCEPTED: &'static str = "'json', 'markdown' or 'md'";

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: '{}'. Expected one of {}",
                s,
                Self::ACCEPTED
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
