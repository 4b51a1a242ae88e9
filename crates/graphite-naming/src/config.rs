use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration key holding the Graphite metric prefix.
///
/// Hosts pass their configuration as a generic string-keyed map; this constant
/// is the single source of truth for the option name looked up in it.
pub const GRAPHITE_PREFIX_OPTION: &str = "metrics.graphite.prefix";

/// Prefix used when [`GRAPHITE_PREFIX_OPTION`] is not configured.
pub const DEFAULT_PREFIX: &str = "metrics";

/// Naming configuration read from the host's option map.
///
/// The prefix is the only option this crate consumes. It stays an explicit
/// `Option` so "not configured" is distinguishable from an empty value; the
/// documented default is applied by [`GraphiteConfig::prefix`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphiteConfig {
    /// Leading segment of every composed metric name.
    #[serde(rename = "metrics.graphite.prefix")]
    pub prefix: Option<String>,
}

impl GraphiteConfig {
    /// Read the configuration out of a generic string-keyed option map.
    ///
    /// Pure lookup, no validation.
    pub fn from_conf(conf: &HashMap<String, String>) -> Self {
        Self {
            prefix: conf.get(GRAPHITE_PREFIX_OPTION).cloned(),
        }
    }

    /// The configured prefix, or [`DEFAULT_PREFIX`] when absent.
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }
}
