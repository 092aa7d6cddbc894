//! # PulsarPermission
//!
//! Grants roles a set of actions on a namespace or a single topic.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, LifecyclePolicy, ResourceStatus};

/// PulsarPermission Custom Resource Definition
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarPermission",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    shortname = "ppermission",
    printcolumn = r#"{"name":"Resource", "type":"string", "jsonPath":".spec.resourceName"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarPermissionSpec {
    /// Connection this permission is managed through
    pub connection_ref: ConnectionRef,
    /// Whether the grant applies to a namespace or a topic
    pub resource_type: PermissionResourceType,
    /// The namespace ("tenant/namespace") or fully qualified topic the
    /// grant applies to
    pub resource_name: String,
    /// Roles receiving the grant
    pub roles: Vec<String>,
    /// Granted actions, e.g. "produce", "consume", "functions"
    /// An empty list revokes all actions for the roles
    #[serde(default)]
    pub actions: Option<Vec<String>>,
    /// Deletion behavior for the Pulsar-side grant
    #[serde(default)]
    pub lifecycle_policy: Option<LifecyclePolicy>,
}

/// Target type of a permission grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PermissionResourceType {
    Namespace,
    Topic,
}

impl HasConnectionRef for PulsarPermission {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
