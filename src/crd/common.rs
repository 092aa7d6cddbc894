//! # Shared CRD Types
//!
//! Types shared across every resource kind: the connection reference, the
//! status/condition shapes, and the deletion lifecycle policy.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reference to the `PulsarConnection` a resource depends on.
///
/// The reference is same-namespace by default: when `namespace` is not set
/// (or set to an empty string), the connection is looked up in the
/// referencing resource's own namespace. A cross-namespace reference is
/// honored only when `namespace` is set explicitly.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRef {
    /// Name of the PulsarConnection resource
    pub name: String,
    /// Namespace of the PulsarConnection resource
    /// Defaults to the namespace of the referencing resource
    #[serde(default)]
    pub namespace: Option<String>,
}

impl ConnectionRef {
    /// A reference whose `name` is empty is treated as not set at all,
    /// even if `namespace` is populated.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.name.is_empty()
    }
}

/// Capability declared by every resource kind that carries a
/// [`ConnectionRef`] in its spec.
///
/// The watch layer dispatches through this trait instead of enumerating
/// resource kinds, so supporting a new referencing kind is a one-line
/// `impl` next to its spec. Kinds that do not reference a connection
/// (`PulsarConnection` itself) return `None` and are skipped by the
/// mapper.
pub trait HasConnectionRef {
    /// The connection reference declared in this resource's spec, if any.
    fn connection_ref(&self) -> Option<&ConnectionRef>;
}

/// Whether the managed Pulsar-side resource is removed when the Kubernetes
/// resource is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum LifecyclePolicy {
    /// Delete the resource from the Pulsar cluster when the Kubernetes
    /// resource is deleted
    CleanUpAfterDeletion,
    /// Keep the resource in the Pulsar cluster after the Kubernetes
    /// resource is deleted
    KeepAfterDeletion,
}

/// Status shared by all resources managed by this controller
///
/// Tracks reconciliation state via conditions, the last generation the
/// controller observed, and the last reconciliation time.
#[derive(Debug, Clone, Deserialize, Serialize, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Observed generation
    #[serde(default)]
    pub observed_generation: Option<i64>,
    /// Last reconciliation time (RFC3339)
    #[serde(default)]
    pub last_reconcile_time: Option<String>,
}

/// Condition represents a status condition for the resource
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition
    pub r#type: String,
    /// Status of condition (True, False, Unknown)
    pub status: String,
    /// Last transition time
    #[serde(default)]
    pub last_transition_time: Option<String>,
    /// Reason for condition
    #[serde(default)]
    pub reason: Option<String>,
    /// Message describing condition
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_ref_empty_name_is_unset() {
        let ref_with_ns_only = ConnectionRef {
            name: String::new(),
            namespace: Some("ns-b".to_string()),
        };
        assert!(ref_with_ns_only.is_unset());

        let named = ConnectionRef {
            name: "conn1".to_string(),
            namespace: None,
        };
        assert!(!named.is_unset());
    }

    #[test]
    fn test_connection_ref_deserializes_without_namespace() {
        let yaml = "name: my-connection";
        let parsed: ConnectionRef = serde_yaml::from_str(yaml).expect("should deserialize");
        assert_eq!(parsed.name, "my-connection");
        assert!(parsed.namespace.is_none());
    }
}
