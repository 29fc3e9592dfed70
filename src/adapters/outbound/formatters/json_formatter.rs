use crate::application::read_models::InventoryReadModel;
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for JsonFormatter {
    fn format(&self, model: &InventoryReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::InventoryReadModelBuilder;
    use crate::inventory::domain::{
        Host, PackageEcosystem, PackageName, PackageTimeline, Timestamp, Version,
    };
    use chrono::{TimeZone, Utc};

    fn ts(day: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_format_includes_intervals() {
        let mut host = Host::new(
            "web-01".to_string(),
            "10.0.0.5".to_string(),
            None,
            None,
            None,
            None,
            None,
        );
        let mut timeline = PackageTimeline::create(
            host.id(),
            PackageName::new("openssl".to_string()).unwrap(),
            PackageEcosystem::Deb,
            None,
            None,
            Version::new("3.0.1".to_string()).unwrap(),
            ts(1),
            None,
        );
        timeline.remove(ts(10)).unwrap();
        host.add_package(timeline).unwrap();
        let model = InventoryReadModelBuilder::build(&host, true, None);

        let output = JsonFormatter::new().format(&model).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["host"]["hostname"], "web-01");
        let package = &json["packages"][0];
        assert_eq!(package["name"], "openssl");
        assert_eq!(package["active"], false);
        assert!(package.get("current_version").is_none());
        assert_eq!(package["intervals"][0]["version"], "3.0.1");
        assert_eq!(package["intervals"][0]["removed_at"], "2025-01-10T00:00:00Z");
    }
}
