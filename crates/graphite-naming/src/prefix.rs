use tracing::trace;

use crate::error::{NamingError, NamingResult};
use crate::tags::MetricTags;

/// Composes the fully qualified metric prefix for one metrics event.
///
/// Joins, in fixed order, every non-empty segment of: `prefix`, topology name,
/// component id, worker host, worker port, task id — dot-separated. Empty
/// segments are skipped outright, so the result never contains `..` and never
/// starts or ends with a dot. `rawStormId` is carried in the tag set but not
/// part of the name.
///
/// # Errors
/// - [`NamingError::MissingPrefix`] when `prefix` is `None`; the configuration
///   default upstream makes this a caller bug. `Some("")` is accepted and
///   skipped like any other empty segment.
/// - [`NamingError::EmptyName`] when every segment is empty.
pub fn metric_prefix(prefix: Option<&str>, tags: &MetricTags) -> NamingResult<String> {
    let prefix = prefix.ok_or(NamingError::MissingPrefix)?;

    let segments = [
        prefix,
        &tags.storm_id,
        &tags.src_component_id,
        &tags.src_worker_host,
        &tags.src_worker_port,
        &tags.src_task_id,
    ];

    let name = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(".");

    if name.is_empty() {
        return Err(NamingError::EmptyName);
    }

    trace!(%name, "composed metric prefix");
    Ok(name)
}
