use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use graphite_naming::{GraphiteConfig, MetricTags, TaskContext, metric_prefix};

/// Minimal stand-in for a host metrics consumer: parses the topology
/// configuration, then formats one metric name per sample task event.
fn main() -> anyhow::Result<()> {
    // 1) logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("logger initialized");

    // 2) topology configuration, as the host would hand it over
    let config: GraphiteConfig = serde_json::from_str(
        r#"{
            "metrics.graphite.prefix": "prod.storm",
            "metrics.graphite.host": "graphite01.example.net",
            "metrics.graphite.port": "2003"
        }"#,
    )?;
    info!(prefix = config.prefix(), "configuration loaded");

    // 3) sample task events for one running topology
    let raw_storm_id = "Example-Topology-1-2345";
    let events = [
        TaskContext::new("spout", "worker1.example.net", 6700, 1),
        TaskContext::new("count.bolt", "worker2.example.net", 6701, 3008),
        TaskContext::new("sink", "worker1.example.net", 6700, 42),
    ];

    for task in &events {
        let tags = match MetricTags::from_task(raw_storm_id, task) {
            Ok(tags) => tags,
            Err(err) => {
                warn!(%err, raw_storm_id, "dropping event with malformed topology id");
                continue;
            }
        };

        let name = metric_prefix(Some(config.prefix()), &tags)?;
        info!(%name, component = task.component_id(), "metric name composed");
    }

    Ok(())
}
