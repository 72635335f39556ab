//! Client side of the OCM service-log API.
//!
//! [`EntryRepository`] is the entry point: it posts internal-only entries to a
//! cluster and retrieves every entry matching a set of search predicates,
//! walking the size-limited list endpoint page by page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod entry;
pub mod error;
pub mod ocm;
pub mod paging;
pub mod query;
pub mod repository;
pub mod service;
pub mod template;

pub use entry::{NewLogEntry, NewLogEntryBuilder};
pub use error::{Error, Result};
pub use ocm::OcmClient;
pub use paging::{fetch_all, LogPage, PAGE_SIZE};
pub use query::build_search;
pub use repository::EntryRepository;
pub use service::LogService;
pub use template::{load_templates, Template};

/// A single service log as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub cluster_id: String,
    pub cluster_uuid: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub description: String,
    pub event_stream_id: String,
    pub href: String,
    pub id: String,
    pub internal_only: bool,
    pub kind: String,
    pub log_type: String,
    pub service_name: String,
    pub severity: Severity,
    pub summary: String,
    pub timestamp: DateTime<Utc>,
    pub username: String,
}

/// Severity of a service log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
    Major,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
            Severity::Major => "Major",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Debug" => Ok(Severity::Debug),
            "Info" => Ok(Severity::Info),
            "Warning" => Ok(Severity::Warning),
            "Error" => Ok(Severity::Error),
            "Fatal" => Ok(Severity::Fatal),
            "Major" => Ok(Severity::Major),
            "Critical" => Ok(Severity::Critical),
            other => Err(format!("invalid severity: {other}")),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
