use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{LogEntry, LogService, Result};

/// Number of entries requested per page.
pub const PAGE_SIZE: usize = 1000;

/// One page of the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogPage {
    pub kind: String,
    /// 1-based index of this page.
    pub page: usize,
    /// Number of items in this page as reported by the service. Paging counts
    /// `items` instead, so a missing field cannot end retrieval early.
    pub size: usize,
    /// Total number of matching entries, as reported by the service.
    pub total: usize,
    pub items: Vec<LogEntry>,
}

/// Retrieves every entry of `cluster_id` matching `search`.
///
/// Pages are requested one after another, starting at page 1, until the
/// service returns fewer items than [`PAGE_SIZE`]. When the total is an exact
/// multiple of the page size this costs one extra request, answered with an
/// empty page. Entries keep the order the service returned them in.
///
/// Any failed request aborts the whole retrieval: entries from earlier pages
/// are dropped rather than returned as a truncated list.
pub fn fetch_all<S: LogService + ?Sized>(
    service: &S,
    cluster_id: &str,
    search: &str,
) -> Result<Vec<LogEntry>> {
    fetch_pages(service, cluster_id, search, PAGE_SIZE)
}

fn fetch_pages<S: LogService + ?Sized>(
    service: &S,
    cluster_id: &str,
    search: &str,
    capacity: usize,
) -> Result<Vec<LogEntry>> {
    let mut entries = Vec::new();
    let mut page = 1;

    loop {
        debug!(cluster_id, search, page, size = capacity, "requesting service log page");
        let response = service.list(cluster_id, search, page, capacity)?;
        let returned = response.items.len();
        if returned != response.size {
            debug!(page, size = response.size, returned, "page size field disagrees with items");
        }
        entries.extend(response.items);

        if returned < capacity {
            break;
        }
        page += 1;
    }

    debug!(cluster_id, pages = page, entries = entries.len(), "retrieved service logs");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fake::FakeService;
    use crate::Error;

    #[test]
    fn test_short_last_page_stops() {
        let service = FakeService::with_entries(2500);

        let entries = fetch_all(&service, "cluster", "").unwrap();

        assert_eq!(entries.len(), 2500);
        assert_eq!(service.requested_pages(), vec![1, 2, 3]);
    }

    #[test]
    fn test_exact_multiple_needs_one_empty_page() {
        let service = FakeService::with_entries(2000);

        let entries = fetch_all(&service, "cluster", "").unwrap();

        assert_eq!(entries.len(), 2000);
        assert_eq!(service.requested_pages(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_result_is_one_request() {
        let service = FakeService::with_entries(0);

        let entries = fetch_all(&service, "cluster", "").unwrap();

        assert!(entries.is_empty());
        assert_eq!(service.requested_pages(), vec![1]);
    }

    #[test]
    fn test_request_count_for_small_capacities() {
        for capacity in 1..=4 {
            for total in 0..=12 {
                let service = FakeService::with_entries(total);
                fetch_pages(&service, "c", "", capacity).unwrap();

                let expected = total / capacity + 1;
                assert_eq!(
                    service.requests.borrow().len(),
                    expected,
                    "capacity {capacity}, total {total}"
                );
            }
        }
    }

    #[test]
    fn test_every_request_carries_filter_and_capacity() {
        let service = FakeService::with_entries(1200);

        fetch_all(&service, "abc", "severity = 'Info'").unwrap();

        for request in service.requests.borrow().iter() {
            assert_eq!(request.cluster_id, "abc");
            assert_eq!(request.search, "severity = 'Info'");
            assert_eq!(request.size, PAGE_SIZE);
        }
    }

    #[test]
    fn test_order_is_preserved_across_pages() {
        let service = FakeService::with_entries(2100);

        let ids: Vec<String> = fetch_all(&service, "c", "")
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        let expected: Vec<String> = (0..2100).map(|i| format!("log-{i}")).collect();

        assert_eq!(ids, expected);
    }

    #[test]
    fn test_repeated_retrieval_is_identical() {
        let service = FakeService::with_entries(1500);

        let first = fetch_all(&service, "c", "").unwrap();
        let second = fetch_all(&service, "c", "").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_size_field_does_not_truncate() {
        let service = FakeService {
            report_size: false,
            ..FakeService::with_entries(2500)
        };

        let entries = fetch_all(&service, "c", "").unwrap();

        assert_eq!(entries.len(), 2500);
        assert_eq!(service.requested_pages(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_discards_earlier_pages() {
        let service = FakeService {
            fail_on_page: Some(2),
            ..FakeService::with_entries(3000)
        };

        let result = fetch_all(&service, "c", "");

        assert!(matches!(result, Err(Error::Remote { status: 500, .. })));
        assert_eq!(service.requested_pages(), vec![1, 2]);
    }
}
