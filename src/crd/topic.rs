//! # PulsarTopic

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, LifecyclePolicy, ResourceStatus};

/// PulsarTopic Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: pulsar.microscaler.io/v1alpha1
/// kind: PulsarTopic
/// metadata:
///   name: orders
///   namespace: messaging
/// spec:
///   connectionRef:
///     name: production-cluster
///   name: persistent://analytics/ingest/orders
///   partitions: 4
/// ```
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarTopic",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    shortname = "ptopic",
    printcolumn = r#"{"name":"Topic", "type":"string", "jsonPath":".spec.name"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarTopicSpec {
    /// Connection this topic is managed through
    pub connection_ref: ConnectionRef,
    /// Fully qualified topic name, e.g. "persistent://tenant/namespace/topic"
    pub name: String,
    /// Whether the topic is persistent
    /// Defaults to true; must agree with the name's scheme when both are set
    #[serde(default = "default_persistent")]
    pub persistent: bool,
    /// Number of partitions; 0 creates a non-partitioned topic
    #[serde(default)]
    pub partitions: Option<i32>,
    /// Maximum number of producers on the topic
    #[serde(default)]
    pub max_producers: Option<i32>,
    /// Maximum number of consumers on the topic
    #[serde(default)]
    pub max_consumers: Option<i32>,
    /// Deletion behavior for the Pulsar-side topic
    #[serde(default)]
    pub lifecycle_policy: Option<LifecyclePolicy>,
}

fn default_persistent() -> bool {
    true
}

impl HasConnectionRef for PulsarTopic {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
