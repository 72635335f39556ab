//! Connection settings from flags, environment variables and the config file.
//!
//! Flags and their environment variables win over `config.yaml`, which lives
//! in the platform config directory unless `--config` or
//! `SERVICELOGGER_CONFIG_DIR` point elsewhere.

use std::env;
use std::path::{Path, PathBuf};

use clap::Args;
use config::{Config, File};
use directories::ProjectDirs;
use eyre::{eyre, Result, WrapErr};
use serde::Deserialize;
use tracing::debug;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "geowa4";
const APPLICATION: &str = "servicelogger";

const CONFIG_DIR_ENV: &str = "SERVICELOGGER_CONFIG_DIR";
const CONFIG_FILE: &str = "config.yaml";

/// Values read from the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub(crate) cluster_id: Option<String>,
    pub(crate) ocm_url: Option<String>,
    pub(crate) ocm_token: Option<String>,
}

/// Where to reach OCM and which cluster to work on.
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// Internal ID of the cluster
    #[arg(long, short = 'c', env = "CLUSTER_ID")]
    pub cluster_id: Option<String>,

    /// Base URL of the OCM API, e.g. https://api.openshift.com
    #[arg(long, env = "OCM_URL")]
    pub ocm_url: Option<String>,

    /// OCM access token
    #[arg(long, visible_alias = "token", env = "OCM_TOKEN", hide_env_values = true)]
    pub ocm_token: Option<String>,
}

/// Fully resolved connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Connection {
    pub(crate) cluster_id: String,
    pub(crate) ocm_url: String,
    pub(crate) ocm_token: String,
}

impl ConnectionArgs {
    pub(crate) fn resolve(&self, file: &FileConfig) -> Result<Connection> {
        let ocm_url = pick(&self.ocm_url, &file.ocm_url)
            .ok_or_else(|| eyre!("argument --ocm-url or environment variable $OCM_URL not set"))?;
        let ocm_token = pick(&self.ocm_token, &file.ocm_token).ok_or_else(|| {
            eyre!("argument --ocm-token or environment variable $OCM_TOKEN not set")
        })?;
        let cluster_id = pick(&self.cluster_id, &file.cluster_id).ok_or_else(|| {
            eyre!("argument --cluster-id or environment variable $CLUSTER_ID not set")
        })?;

        Ok(Connection {
            cluster_id,
            ocm_url,
            ocm_token,
        })
    }
}

/// First non-blank value, flag before file.
fn pick(flag: &Option<String>, file: &Option<String>) -> Option<String> {
    flag.iter()
        .chain(file.iter())
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Directory holding `config.yaml`.
pub(crate) fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| eyre!("unable to determine the config directory"))
}

/// Reads the config file. An explicit path must exist; the default one may not.
pub(crate) fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (config_dir()?.join(CONFIG_FILE), false),
    };
    debug!(path = %path.display(), required, "reading config file");

    Config::builder()
        .add_source(File::from(path.as_path()).required(required))
        .build()
        .and_then(|settings| settings.try_deserialize::<FileConfig>())
        .wrap_err_with(|| format!("bad config file ({})", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn file(cluster_id: &str, ocm_url: &str, ocm_token: &str) -> FileConfig {
        FileConfig {
            cluster_id: Some(cluster_id.to_string()),
            ocm_url: Some(ocm_url.to_string()),
            ocm_token: Some(ocm_token.to_string()),
        }
    }

    #[test]
    fn test_flags_win_over_file() {
        let args = ConnectionArgs {
            cluster_id: Some("from-flag".to_string()),
            ..ConnectionArgs::default()
        };

        let connection = args.resolve(&file("from-file", "https://ocm", "t")).unwrap();

        assert_eq!(connection.cluster_id, "from-flag");
        assert_eq!(connection.ocm_url, "https://ocm");
        assert_eq!(connection.ocm_token, "t");
    }

    #[test]
    fn test_blank_flag_falls_back_to_file() {
        let args = ConnectionArgs {
            ocm_url: Some("  ".to_string()),
            ..ConnectionArgs::default()
        };

        let connection = args.resolve(&file("c", "https://ocm", "t")).unwrap();

        assert_eq!(connection.ocm_url, "https://ocm");
    }

    #[test]
    fn test_missing_values_name_flag_and_variable() {
        let args = ConnectionArgs::default();

        let err = args.resolve(&FileConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument --ocm-url or environment variable $OCM_URL not set"
        );

        let err = args
            .resolve(&FileConfig {
                ocm_url: Some("https://ocm".to_string()),
                ocm_token: Some("t".to_string()),
                ..FileConfig::default()
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument --cluster-id or environment variable $CLUSTER_ID not set"
        );
    }

    #[test]
    fn test_load_reads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "cluster_id: abc\nocm_url: https://api.example.com\n").unwrap();

        let config = load(Some(&path)).unwrap();

        assert_eq!(config.cluster_id.as_deref(), Some("abc"));
        assert_eq!(config.ocm_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.ocm_token, None);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = load(Some(&dir.path().join("absent.yaml")));

        assert!(result.is_err());
    }
}
