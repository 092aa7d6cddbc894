//! # PulsarGeoReplication
//!
//! Links two Pulsar clusters for geo-replication. The resource is managed
//! through `connectionRef` (the local cluster) and registers the cluster
//! behind `destinationConnectionRef` as a replication peer. Event mapping
//! follows `connectionRef`: the local connection is the one whose
//! reconciler owns this resource.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, LifecyclePolicy, ResourceStatus};

/// PulsarGeoReplication Custom Resource Definition
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarGeoReplication",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarGeoReplicationSpec {
    /// Connection for the local cluster
    pub connection_ref: ConnectionRef,
    /// Connection for the remote cluster to replicate with
    pub destination_connection_ref: ConnectionRef,
    /// Deletion behavior for the Pulsar-side replication cluster entry
    #[serde(default)]
    pub lifecycle_policy: Option<LifecyclePolicy>,
}

impl HasConnectionRef for PulsarGeoReplication {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
