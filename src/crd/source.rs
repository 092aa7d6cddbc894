//! # PulsarSource
//!
//! Source connector: pulls records from an external system into a topic.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, ResourceStatus};

/// PulsarSource Custom Resource Definition
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarSource",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarSourceSpec {
    /// Connection this source is managed through
    pub connection_ref: ConnectionRef,
    /// Tenant the source runs under
    pub tenant: String,
    /// Pulsar namespace the source runs under
    pub namespace: String,
    /// Connector archive, e.g. "builtin://kafka" or a package URL
    pub archive: String,
    /// Topic the source writes records to
    pub topic_name: String,
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

impl HasConnectionRef for PulsarSource {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
