//! # PulsarTenant
//!
//! Tenant resource. A tenant is the top level of the Pulsar resource
//! hierarchy; namespaces and topics live underneath it.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, LifecyclePolicy, ResourceStatus};

/// PulsarTenant Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: pulsar.microscaler.io/v1alpha1
/// kind: PulsarTenant
/// metadata:
///   name: analytics
///   namespace: messaging
/// spec:
///   connectionRef:
///     name: production-cluster
///   adminRoles:
///     - analytics-admin
/// ```
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarTenant",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    shortname = "ptenant",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarTenantSpec {
    /// Connection this tenant is managed through
    pub connection_ref: ConnectionRef,
    /// Roles granted tenant-admin permissions
    #[serde(default)]
    pub admin_roles: Option<Vec<String>>,
    /// Clusters the tenant is allowed to use
    /// Defaults to all clusters known to the connection
    #[serde(default)]
    pub allowed_clusters: Option<Vec<String>>,
    /// Deletion behavior for the Pulsar-side tenant
    #[serde(default)]
    pub lifecycle_policy: Option<LifecyclePolicy>,
}

impl HasConnectionRef for PulsarTenant {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
