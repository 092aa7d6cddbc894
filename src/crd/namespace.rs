//! # PulsarNamespace
//!
//! Namespace resource carrying the policies (retention, TTL, backlog)
//! applied to every topic created under it.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, LifecyclePolicy, ResourceStatus};

/// PulsarNamespace Custom Resource Definition
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarNamespace",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    shortname = "pns",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarNamespaceSpec {
    /// Connection this namespace is managed through
    pub connection_ref: ConnectionRef,
    /// Fully qualified namespace name in "tenant/namespace" form
    pub name: String,
    /// Number of bundles to split the namespace into
    #[serde(default)]
    pub bundles: Option<i32>,
    /// Message time-to-live, e.g. "1h" or "7d"
    #[serde(default)]
    pub message_ttl: Option<String>,
    /// Retention time for acknowledged messages, e.g. "24h"
    #[serde(default)]
    pub retention_time: Option<String>,
    /// Retention size for acknowledged messages, e.g. "10G"
    #[serde(default)]
    pub retention_size: Option<String>,
    /// Maximum number of producers per topic in this namespace
    #[serde(default)]
    pub max_producers_per_topic: Option<i32>,
    /// Maximum number of consumers per topic in this namespace
    #[serde(default)]
    pub max_consumers_per_topic: Option<i32>,
    /// Deletion behavior for the Pulsar-side namespace
    #[serde(default)]
    pub lifecycle_policy: Option<LifecyclePolicy>,
}

impl HasConnectionRef for PulsarNamespace {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
