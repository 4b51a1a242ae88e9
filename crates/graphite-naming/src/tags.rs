use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{NamingError, NamingResult};
use crate::task::TaskContext;

/// Wire names of the fixed tag set. `rawStormId` is carried for hosts that
/// forward tag pairs but never becomes part of a composed name.
pub const TAG_KEYS: [&str; 6] = [
    "stormId",
    "rawStormId",
    "srcComponentId",
    "srcWorkerHost",
    "srcWorkerPort",
    "srcTaskId",
];

/// Normalized tag set describing the origin of one metrics event.
///
/// Replaces the upstream stringly-keyed map with named fields; the fixed wire
/// names survive through [`MetricTags::get`] and [`MetricTags::iter`] for hosts
/// that forward tag pairs to a backend.
///
/// String-valued fields are sanitized (see [`sanitize_tag`]); the two numeric
/// fields are carried as their decimal form and never sanitized. An empty value
/// models an absent tag and is skipped by the prefix composer.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTags {
    /// Stable topology name, nonce suffix stripped (`stormId`).
    pub storm_id: String,
    /// Original topology id including the suffix (`rawStormId`).
    pub raw_storm_id: String,
    /// Emitting component (`srcComponentId`).
    pub src_component_id: String,
    /// Worker host (`srcWorkerHost`).
    pub src_worker_host: String,
    /// Worker port, decimal (`srcWorkerPort`).
    pub src_worker_port: String,
    /// Task id, decimal (`srcTaskId`).
    pub src_task_id: String,
}

impl MetricTags {
    /// Extract the tag set for one metrics event.
    ///
    /// Strips the incarnation/nonce suffix from `raw_storm_id` to recover the
    /// stable topology name, then sanitizes every string-valued tag.
    ///
    /// # Errors
    /// [`NamingError::InvalidTopologyId`] when `raw_storm_id` has fewer than
    /// three dash-delimited segments, i.e. no suffix to strip.
    pub fn from_task(raw_storm_id: &str, task: &TaskContext) -> NamingResult<Self> {
        let storm_id = strip_nonce(raw_storm_id)?;
        trace!(raw = raw_storm_id, stripped = storm_id, "stripped topology nonce");

        Ok(Self {
            storm_id: sanitize_tag(storm_id),
            raw_storm_id: sanitize_tag(raw_storm_id),
            src_component_id: sanitize_tag(task.component_id()),
            src_worker_host: sanitize_tag(task.worker_host()),
            src_worker_port: task.worker_port().to_string(),
            src_task_id: task.task_id().to_string(),
        })
    }

    /// Get a tag value by its wire name, if present and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "stormId" => &self.storm_id,
            "rawStormId" => &self.raw_storm_id,
            "srcComponentId" => &self.src_component_id,
            "srcWorkerHost" => &self.src_worker_host,
            "srcWorkerPort" => &self.src_worker_port,
            "srcTaskId" => &self.src_task_id,
            _ => return None,
        };
        (!value.is_empty()).then_some(value.as_str())
    }

    /// Iterate through all non-empty tags as `(&str, &str)` pairs under their
    /// wire names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        TAG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
    }
}

/// Recovers the stable topology name from a raw id.
///
/// A raw id is dash-delimited, `<Name>-<incarnation>-<nonce>`; the trailing two
/// segments are appended by the scheduler on each (re)submission and dropped
/// here. The name itself may contain dashes (e.g.
/// `"Example-Topology-1-2345"` -> `"Example-Topology"`).
fn strip_nonce(raw_storm_id: &str) -> NamingResult<&str> {
    let segments: Vec<&str> = raw_storm_id.split('-').collect();
    if segments.len() < 3 {
        return Err(NamingError::InvalidTopologyId(raw_storm_id.to_string()));
    }

    let suffix_len = segments[segments.len() - 2].len() + segments[segments.len() - 1].len() + 2;
    Ok(&raw_storm_id[..raw_storm_id.len() - suffix_len])
}

/// Replaces every `.` with `_` so a tag value cannot be read as multiple
/// segments of a hierarchical metric name. Identity on dot-free input,
/// idempotent.
pub fn sanitize_tag(tag: &str) -> String {
    tag.replace('.', "_")
}

#[cfg(test)]
mod tests {
    use super::{MetricTags, TAG_KEYS, sanitize_tag, strip_nonce};
    use crate::error::NamingError;
    use crate::task::TaskContext;

    fn task() -> TaskContext {
        TaskContext::new("bolt1", "host1", 6700, 3008)
    }

    #[test]
    fn strips_nonce_from_dashed_name() {
        assert_eq!(strip_nonce("Example-Topology-1-2345").unwrap(), "Example-Topology");
    }

    #[test]
    fn strips_nonce_from_minimal_id() {
        assert_eq!(strip_nonce("a-1-2").unwrap(), "a");
    }

    #[test]
    fn rejects_id_with_one_dash() {
        let err = strip_nonce("Example-1").unwrap_err();
        assert!(matches!(err, NamingError::InvalidTopologyId(id) if id == "Example-1"));
    }

    #[test]
    fn rejects_id_with_no_dash() {
        assert!(strip_nonce("Example").is_err());
    }

    #[test]
    fn sanitize_replaces_every_dot() {
        assert_eq!(sanitize_tag("a.b.c"), "a_b_c");
    }

    #[test]
    fn sanitize_is_identity_without_dots() {
        assert_eq!(sanitize_tag("worker-host_3"), "worker-host_3");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize_tag("component.id");
        assert_eq!(sanitize_tag(&once), once);
    }

    #[test]
    fn from_task_fills_all_tags() {
        let tags = MetricTags::from_task("Example-Topology-1-2345", &task()).unwrap();
        assert_eq!(tags.storm_id, "Example-Topology");
        assert_eq!(tags.raw_storm_id, "Example-Topology-1-2345");
        assert_eq!(tags.src_component_id, "bolt1");
        assert_eq!(tags.src_worker_host, "host1");
        assert_eq!(tags.src_worker_port, "6700");
        assert_eq!(tags.src_task_id, "3008");
    }

    #[test]
    fn from_task_sanitizes_dotted_values() {
        let task = TaskContext::new("component.id", "worker.host", 6700, 25);
        let tags = MetricTags::from_task("Example-Topology-1-2345", &task).unwrap();
        assert_eq!(tags.src_component_id, "component_id");
        assert_eq!(tags.src_worker_host, "worker_host");
        // numeric tags are never touched
        assert_eq!(tags.src_worker_port, "6700");
        assert_eq!(tags.src_task_id, "25");
    }

    #[test]
    fn from_task_propagates_invalid_id() {
        assert!(MetricTags::from_task("Example-1", &task()).is_err());
    }

    #[test]
    fn get_uses_wire_names() {
        let tags = MetricTags::from_task("Example-Topology-1-2345", &task()).unwrap();
        assert_eq!(tags.get("stormId"), Some("Example-Topology"));
        assert_eq!(tags.get("rawStormId"), Some("Example-Topology-1-2345"));
        assert_eq!(tags.get("srcComponentId"), Some("bolt1"));
        assert_eq!(tags.get("srcWorkerHost"), Some("host1"));
        assert_eq!(tags.get("srcWorkerPort"), Some("6700"));
        assert_eq!(tags.get("srcTaskId"), Some("3008"));
        assert_eq!(tags.get("unknown"), None);
    }

    #[test]
    fn get_treats_empty_as_absent() {
        let mut tags = MetricTags::from_task("Example-Topology-1-2345", &task()).unwrap();
        tags.src_worker_host.clear();
        assert_eq!(tags.get("srcWorkerHost"), None);
    }

    #[test]
    fn iter_yields_all_non_empty_pairs() {
        let tags = MetricTags::from_task("Example-Topology-1-2345", &task()).unwrap();
        let pairs: Vec<(&str, &str)> = tags.iter().collect();
        assert_eq!(pairs.len(), TAG_KEYS.len());
        assert_eq!(pairs[0], ("stormId", "Example-Topology"));
    }

    #[test]
    fn serde_roundtrip_json() {
        let tags = MetricTags::from_task("Example-Topology-1-2345", &task()).unwrap();
        let json = serde_json::to_string(&tags).unwrap();
        assert!(json.contains("\"stormId\":\"Example-Topology\""));
        assert!(json.contains("\"rawStormId\":\"Example-Topology-1-2345\""));

        let back: MetricTags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }
}
