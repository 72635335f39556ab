use tracing::{debug, warn};

use crate::{Error, LogPage, LogService, NewLogEntry, Result};

const SERVICE_LOGS_PATH: &str = "/api/service_logs/v1";

/// [`LogService`] backed by the OCM REST API.
///
/// The token is sent as a bearer token on every request. No request timeout
/// is configured, so a stalled service stalls the caller.
pub struct OcmClient {
    agent: ureq::Agent,
    base_url: String,
    authorization: String,
}

impl OcmClient {
    /// Creates a client for the OCM instance at `url`, e.g. `https://api.openshift.com`.
    pub fn new(url: &str, token: &str) -> Result<Self> {
        let base_url = url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::Validation("OCM URL must not be empty".to_string()));
        }
        if token.trim().is_empty() {
            return Err(Error::Validation("OCM token must not be empty".to_string()));
        }

        // Status codes are inspected by the caller, not turned into errors.
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();

        Ok(Self {
            agent: ureq::Agent::new_with_config(config),
            base_url: base_url.to_string(),
            authorization: format!("Bearer {}", token.trim()),
        })
    }

    fn cluster_logs_url(&self, cluster_id: &str) -> String {
        format!(
            "{}{}/clusters/{}/cluster_logs",
            self.base_url, SERVICE_LOGS_PATH, cluster_id
        )
    }

    fn add_url(&self) -> String {
        format!("{}{}/cluster_logs", self.base_url, SERVICE_LOGS_PATH)
    }
}

impl LogService for OcmClient {
    fn list(&self, cluster_id: &str, search: &str, page: usize, size: usize) -> Result<LogPage> {
        let mut request = self
            .agent
            .get(&self.cluster_logs_url(cluster_id))
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
            .query("size", size.to_string())
            .query("page", page.to_string());
        if !search.is_empty() {
            request = request.query("search", search);
        }

        let mut response = request.call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;

        if !(200..300).contains(&status) {
            return Err(Error::Remote {
                status,
                message: format!(
                    "listing service logs of cluster {cluster_id} failed with status {status}: {}",
                    body.trim()
                ),
            });
        }

        let page: LogPage = serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("invalid service log page: {e}")))?;
        debug!(page = page.page, size = page.size, total = page.total, "received page");
        Ok(page)
    }

    fn add(&self, entry: &NewLogEntry) -> Result<u16> {
        let mut response = self
            .agent
            .post(&self.add_url())
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
            .send_json(entry)?;
        let status = response.status().as_u16();

        if status != 201 {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            warn!(status, body = body.trim(), "service log was not created");
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = OcmClient::new("https://api.example.com/", "token").unwrap();
        assert_eq!(
            client.cluster_logs_url("abc"),
            "https://api.example.com/api/service_logs/v1/clusters/abc/cluster_logs"
        );
        assert_eq!(
            client.add_url(),
            "https://api.example.com/api/service_logs/v1/cluster_logs"
        );
    }

    #[test]
    fn test_empty_url_or_token_is_rejected() {
        assert!(matches!(OcmClient::new(" ", "t"), Err(Error::Validation(_))));
        assert!(matches!(OcmClient::new("https://x", ""), Err(Error::Validation(_))));
    }
}
