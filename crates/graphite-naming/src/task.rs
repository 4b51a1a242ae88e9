use serde::{Deserialize, Serialize};

/// Source location of a single metrics event inside a running topology.
///
/// Supplied by the host metrics consumer once per handled event. Field names on
/// the wire follow the upstream `TaskInfo` record (`srcComponentId`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskContext {
    /// Component (spout/bolt) that emitted the data point.
    src_component_id: String,
    /// Host the emitting worker runs on.
    src_worker_host: String,
    /// Port of the emitting worker.
    src_worker_port: u16,
    /// Task index within the component.
    src_task_id: i32,
}

impl TaskContext {
    /// Create a task context for one metrics event.
    pub fn new<C, H>(component_id: C, worker_host: H, worker_port: u16, task_id: i32) -> Self
    where
        C: Into<String>,
        H: Into<String>,
    {
        Self {
            src_component_id: component_id.into(),
            src_worker_host: worker_host.into(),
            src_worker_port: worker_port,
            src_task_id: task_id,
        }
    }

    /// Get the emitting component id.
    pub fn component_id(&self) -> &str {
        &self.src_component_id
    }

    /// Get the worker host.
    pub fn worker_host(&self) -> &str {
        &self.src_worker_host
    }

    /// Get the worker port.
    pub fn worker_port(&self) -> u16 {
        self.src_worker_port
    }

    /// Get the task id.
    pub fn task_id(&self) -> i32 {
        self.src_task_id
    }
}
