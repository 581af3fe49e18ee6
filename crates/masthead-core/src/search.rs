//! Search form submission

use tracing::debug;

/// Hand the trimmed query to `on_search`, if there is one.
///
/// Returns the dispatched query, or `None` when no callback is configured.
/// There is no validation: an empty (or all-whitespace) query is dispatched
/// as `""`.
pub fn submit_search<F>(raw: &str, on_search: Option<F>) -> Option<String>
where
    F: FnOnce(String),
{
    let on_search = on_search?;
    let query = raw.trim().to_string();
    debug!(query = %query, "Dispatching search");
    on_search(query.clone());
    Some(query)
}
