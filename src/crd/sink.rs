//! # PulsarSink
//!
//! Sink connector: delivers records from topics to an external system.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, ResourceStatus};

/// PulsarSink Custom Resource Definition
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarSink",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarSinkSpec {
    /// Connection this sink is managed through
    pub connection_ref: ConnectionRef,
    /// Tenant the sink runs under
    pub tenant: String,
    /// Pulsar namespace the sink runs under
    pub namespace: String,
    /// Connector archive, e.g. "builtin://elastic-search" or a package URL
    pub archive: String,
    /// Topics the sink consumes from
    pub inputs: Vec<String>,
    /// Connector class name, when the archive contains more than one
    #[serde(default)]
    pub class_name: Option<String>,
    /// Connector-specific configuration
    #[serde(default)]
    pub configs: Option<BTreeMap<String, String>>,
    /// Number of connector instances
    #[serde(default)]
    pub parallelism: Option<i32>,
}

impl HasConnectionRef for PulsarSink {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
