use serde::Serialize;

use crate::{Error, Result, Severity};

/// A log entry ready to be submitted to the service.
///
/// Only [`NewLogEntryBuilder::build`] creates one, so every value has passed
/// validation before it reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLogEntry {
    pub cluster_id: String,
    pub severity: Severity,
    pub service_name: String,
    pub summary: String,
    pub description: String,
    pub internal_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_stream_id: Option<String>,
}

/// Builder for [`NewLogEntry`].
///
/// # Examples
///
/// ```
/// use servicelogger::{NewLogEntryBuilder, Severity};
///
/// let entry = NewLogEntryBuilder::new()
///     .cluster_id("1a2b3c")
///     .severity(Severity::Info)
///     .service_name("SREManualAction")
///     .summary("Node replaced")
///     .description("Replaced an unhealthy worker node.")
///     .build()
///     .unwrap();
/// assert!(!entry.internal_only);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NewLogEntryBuilder {
    cluster_id: Option<String>,
    severity: Option<Severity>,
    service_name: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    internal_only: bool,
    event_stream_id: Option<String>,
}

impl NewLogEntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cluster_id(mut self, cluster_id: impl Into<String>) -> Self {
        self.cluster_id = Some(cluster_id.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Hide the entry from the cluster owner. Defaults to `false`.
    pub fn internal_only(mut self, internal_only: bool) -> Self {
        self.internal_only = internal_only;
        self
    }

    pub fn event_stream_id(mut self, event_stream_id: impl Into<String>) -> Self {
        self.event_stream_id = Some(event_stream_id.into());
        self
    }

    /// Validate the collected fields and build the entry.
    ///
    /// Cluster id, severity, service name, summary and description are
    /// required; blank strings count as missing.
    pub fn build(self) -> Result<NewLogEntry> {
        let severity = self
            .severity
            .ok_or_else(|| Error::Validation("missing required field `severity`".to_string()))?;

        Ok(NewLogEntry {
            cluster_id: required("cluster_id", self.cluster_id)?,
            severity,
            service_name: required("service_name", self.service_name)?,
            summary: required("summary", self.summary)?,
            description: required("description", self.description)?,
            internal_only: self.internal_only,
            event_stream_id: self.event_stream_id.filter(|id| !id.trim().is_empty()),
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(Error::Validation(format!("field `{field}` must not be blank"))),
        None => Err(Error::Validation(format!("missing required field `{field}`"))),
    }
}
