//! # PulsarFunction

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, ResourceStatus};

/// PulsarFunction Custom Resource Definition
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarFunction",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarFunctionSpec {
    /// Connection this function is managed through
    pub connection_ref: ConnectionRef,
    /// Tenant the function runs under
    pub tenant: String,
    /// Pulsar namespace the function runs under
    pub namespace: String,
    /// Fully qualified class name of the function implementation
    #[serde(default)]
    pub class_name: Option<String>,
    /// Package holding the function code, e.g.
    /// "function://tenant/ns/name@v1" or an http/file URL
    #[serde(default)]
    pub jar: Option<String>,
    /// Input topics consumed by the function
    pub inputs: Vec<String>,
    /// Output topic produced to
    #[serde(default)]
    pub output: Option<String>,
    /// Number of function instances
    #[serde(default)]
    pub parallelism: Option<i32>,
}

impl HasConnectionRef for PulsarFunction {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
