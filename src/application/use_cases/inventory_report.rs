use crate::application::dto::ReportRequest;
use crate::application::read_models::{InventoryReadModel, InventoryReadModelBuilder};
use crate::ports::outbound::InventoryRepository;
use crate::shared::error::InventoryError;
use crate::shared::Result;

/// InventoryReportUseCase - Read-side queries over the stored inventory
pub struct InventoryReportUseCase<R> {
    repository: R,
}

impl<R: InventoryRepository> InventoryReportUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Builds the report read model for one host
    ///
    /// # Errors
    /// `HostNotFound` if the store has never seen the host
    pub fn execute(&self, request: ReportRequest) -> Result<InventoryReadModel> {
        let host = self
            .repository
            .load_host(&request.hostname)?
            .ok_or_else(|| InventoryError::HostNotFound {
                hostname: request.hostname.clone(),
            })?;

        Ok(InventoryReadModelBuilder::build(
            &host,
            request.include_inactive,
            request.as_of,
        ))
    }

    pub fn list_hosts(&self) -> Result<Vec<String>> {
        self.repository.list_hostnames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::Host;

    struct SingleHostRepository {
        host: Host,
    }

    impl InventoryRepository for SingleHostRepository {
        fn load_host(&self, hostname: &str) -> Result<Option<Host>> {
            Ok((hostname == self.host.hostname()).then(|| self.host.clone()))
        }

        fn save_host(&self, _host: &Host) -> Result<()> {
            Ok(())
        }

        fn list_hostnames(&self) -> Result<Vec<String>> {
            Ok(vec![self.host.hostname().to_string()])
        }
    }

    fn use_case() -> InventoryReportUseCase<SingleHostRepository> {
        let host = Host::new(
            "db-01".to_string(),
            "10.0.0.7".to_string(),
            None,
            None,
            None,
            None,
            None,
        );
        InventoryReportUseCase::new(SingleHostRepository { host })
    }

    #[test]
    fn test_report_for_known_host() {
        let model = use_case()
            .execute(ReportRequest::new("db-01".to_string(), false, None))
            .unwrap();

        assert_eq!(model.host.hostname, "db-01");
        assert!(model.packages.is_empty());
    }

    #[test]
    fn test_report_for_unknown_host() {
        let err = use_case()
            .execute(ReportRequest::new("ghost".to_string(), false, None))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::HostNotFound { hostname }) if hostname == "ghost"
        ));
    }

    #[test]
    fn test_list_hosts() {
        assert_eq!(use_case().list_hosts().unwrap(), vec!["db-01".to_string()]);
    }
}
