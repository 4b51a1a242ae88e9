//! Metric-name formatting for a Storm-style stream-processing metrics consumer.
//!
//! This crate turns per-task runtime context into a normalized tag set and
//! composes those tags with a configurable prefix into one dot-delimited metric
//! name for hierarchical (Graphite-style) backends.
//!
//! ## Example
//! ```rust
//! use graphite_naming::{GraphiteConfig, MetricTags, TaskContext, metric_prefix};
//!
//! # fn main() -> Result<(), graphite_naming::NamingError> {
//! let config = GraphiteConfig::default();
//! let task = TaskContext::new("bolt1", "host1", 6700, 3008);
//!
//! let tags = MetricTags::from_task("Example-Topology-1-2345", &task)?;
//! let name = metric_prefix(Some(config.prefix()), &tags)?;
//! assert_eq!(name, "metrics.Example-Topology.bolt1.host1.6700.3008");
//! # Ok(())
//! # }
//! ```
//!
//! ## Name shape
//! `{prefix}.{stormId}.{srcComponentId}.{srcWorkerHost}.{srcWorkerPort}.{srcTaskId}`,
//! with empty segments skipped and every `.` inside a tag value rewritten to `_`.
//! The trailing incarnation/nonce suffix of the raw topology id is stripped so
//! resubmissions of a topology keep a stable name.
//!
//! ## Transport
//! This crate does NOT talk to a backend. The host forwards the composed name,
//! together with a value and timestamp, over its own Graphite connection.

mod config;
pub use config::{DEFAULT_PREFIX, GRAPHITE_PREFIX_OPTION, GraphiteConfig};

mod error;
pub use error::{NamingError, NamingResult};

mod prefix;
pub use prefix::metric_prefix;

mod tags;
pub use tags::{MetricTags, TAG_KEYS, sanitize_tag};

mod task;
pub use task::TaskContext;
