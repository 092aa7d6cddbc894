//! # PulsarNSIsolationPolicy
//!
//! Pins a set of namespaces to primary/secondary broker groups within a
//! cluster.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, ResourceStatus};

/// PulsarNSIsolationPolicy Custom Resource Definition
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarNSIsolationPolicy",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    printcolumn = r#"{"name":"Cluster", "type":"string", "jsonPath":".spec.cluster"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarNSIsolationPolicySpec {
    /// Connection this policy is managed through
    pub connection_ref: ConnectionRef,
    /// Policy name as registered with the cluster
    pub name: String,
    /// Cluster the policy applies to
    pub cluster: String,
    /// Namespace name regexes the policy selects
    pub namespaces: Vec<String>,
    /// Primary broker host name regexes
    pub primary: Vec<String>,
    /// Secondary broker host name regexes, used on primary failure
    #[serde(default)]
    pub secondary: Option<Vec<String>>,
    /// Automatic failover policy between primary and secondary brokers
    #[serde(default)]
    pub auto_failover_policy: Option<AutoFailoverPolicy>,
}

/// Automatic failover policy for an isolation policy
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoFailoverPolicy {
    /// Policy type, e.g. "min_available"
    pub policy_type: String,
    /// Minimum number of primary brokers that must be available before
    /// failing over to secondary brokers
    #[serde(default)]
    pub min_limit: Option<i32>,
    /// Seconds a broker must be unavailable before it is counted out
    #[serde(default)]
    pub usage_threshold: Option<i32>,
}

impl HasConnectionRef for PulsarNSIsolationPolicy {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
