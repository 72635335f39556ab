/// Connector placed between predicates in a search expression.
const CONNECTOR: &str = " and ";

/// Combines search predicates into a single server-side search expression.
///
/// Predicates are opaque to the client: they are joined in the given order,
/// never parsed, reordered or deduplicated. No predicates yields the empty
/// expression, which matches every entry.
///
/// # Examples
///
/// ```
/// use servicelogger::build_search;
///
/// let search = build_search(&["severity = 'Info'", "service_name = 'SREManualAction'"]);
/// assert_eq!(search, "severity = 'Info' and service_name = 'SREManualAction'");
/// assert_eq!(build_search::<&str>(&[]), "");
/// ```
pub fn build_search<P: AsRef<str>>(predicates: &[P]) -> String {
    predicates
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CONNECTOR)
}
