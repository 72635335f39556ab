use tracing::info;

use crate::{
    build_search, fetch_all, Error, LogEntry, LogService, NewLogEntryBuilder, Result, Severity,
};

/// Service name attached to entries posted by hand.
pub const SERVICE_NAME: &str = "SREManualAction";

/// Summary banner of internal-only entries.
pub const INTERNAL_SUMMARY: &str = "INTERNAL ONLY, DO NOT SHARE WITH CUSTOMER";

/// Status the add endpoint answers with on success. Nothing else counts.
const CREATED: u16 = 201;

/// Typed access to the service logs of a cluster.
pub struct EntryRepository<S> {
    service: S,
}

impl<S: LogService> EntryRepository<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Posts an internal-only `Info` entry carrying `description` to `cluster_id`.
    pub fn post(&self, cluster_id: &str, description: &str) -> Result<()> {
        let entry = NewLogEntryBuilder::new()
            .internal_only(true)
            .cluster_id(cluster_id)
            .severity(Severity::Info)
            .service_name(SERVICE_NAME)
            .summary(INTERNAL_SUMMARY)
            .description(description)
            .build()?;

        let status = self.service.add(&entry)?;
        if status != CREATED {
            return Err(Error::Remote {
                status,
                message: format!(
                    "expected {CREATED} when adding service log but got {status}"
                ),
            });
        }

        info!(cluster_id, "posted internal service log");
        Ok(())
    }

    /// Lists every entry of `cluster_id` matching all `predicates`.
    pub fn list_all<P: AsRef<str>>(
        &self,
        cluster_id: &str,
        predicates: &[P],
    ) -> Result<Vec<LogEntry>> {
        let search = build_search(predicates);
        fetch_all(&self.service, cluster_id, &search)
    }
}
