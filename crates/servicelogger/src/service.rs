use crate::{LogPage, NewLogEntry, Result};

/// The two calls the client makes against the remote service-log API.
///
/// Implementations own transport details such as the URL, authentication and
/// TLS. [`crate::OcmClient`] is the HTTP implementation.
pub trait LogService {
    /// Requests one page of log entries for `cluster_id`.
    ///
    /// `page` is 1-based, `size` is the page capacity. An empty `search`
    /// means no filter.
    fn list(&self, cluster_id: &str, search: &str, page: usize, size: usize) -> Result<LogPage>;

    /// Submits a new entry and returns the HTTP status code of the response.
    fn add(&self, entry: &NewLogEntry) -> Result<u16>;
}

impl<S: LogService + ?Sized> LogService for &S {
    fn list(&self, cluster_id: &str, search: &str, page: usize, size: usize) -> Result<LogPage> {
        (**self).list(cluster_id, search, page, size)
    }

    fn add(&self, entry: &NewLogEntry) -> Result<u16> {
        (**self).add(entry)
    }
}
