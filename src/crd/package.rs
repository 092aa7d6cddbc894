//! # PulsarPackage
//!
//! Uploads a function or connector artifact into the cluster's package
//! registry so functions, sources, and sinks can reference it by URL.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, LifecyclePolicy, ResourceStatus};

/// PulsarPackage Custom Resource Definition
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarPackage",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    printcolumn = r#"{"name":"Package", "type":"string", "jsonPath":".spec.packageUrl"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarPackageSpec {
    /// Connection this package is managed through
    pub connection_ref: ConnectionRef,
    /// Package URL in the registry, e.g. "function://tenant/ns/name@v1"
    pub package_url: String,
    /// Location of the artifact to upload (http(s) or file URL)
    pub file_url: String,
    /// Human-readable description stored with the package
    #[serde(default)]
    pub description: Option<String>,
    /// Contact information stored with the package
    #[serde(default)]
    pub contact: Option<String>,
    /// Arbitrary properties stored with the package
    #[serde(default)]
    pub properties: Option<BTreeMap<String, String>>,
    /// Deletion behavior for the uploaded package
    #[serde(default)]
    pub lifecycle_policy: Option<LifecyclePolicy>,
}

impl HasConnectionRef for PulsarPackage {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        Some(&self.spec.connection_ref)
    }
}
