//! # PulsarConnection
//!
//! The connection resource every dependent kind points at. It holds the
//! service URLs and credentials the reconcilers use to reach a Pulsar
//! cluster. A `PulsarConnection` does not itself reference another
//! connection, which makes it the one managed kind the event mapper
//! skips.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{ConnectionRef, HasConnectionRef, ResourceStatus};

/// PulsarConnection Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: pulsar.microscaler.io/v1alpha1
/// kind: PulsarConnection
/// metadata:
///   name: production-cluster
///   namespace: pulsar-system
/// spec:
///   adminServiceUrl: http://pulsar-broker.pulsar.svc.cluster.local:8080
///   brokerServiceUrl: pulsar://pulsar-broker.pulsar.svc.cluster.local:6650
/// ```
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PulsarConnection",
    group = "pulsar.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "ResourceStatus",
    shortname = "pconn",
    printcolumn = r#"{"name":"Admin URL", "type":"string", "jsonPath":".spec.adminServiceUrl"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarConnectionSpec {
    /// Admin service URL of the Pulsar cluster (HTTP endpoint of the broker
    /// or proxy), used for admin API operations
    #[serde(default)]
    pub admin_service_url: Option<String>,
    /// Broker service URL of the Pulsar cluster (pulsar:// or pulsar+ssl://)
    #[serde(default)]
    pub broker_service_url: Option<String>,
    /// Name of the Pulsar cluster as registered with the brokers
    /// Required only for geo-replication setups
    #[serde(default)]
    pub cluster_name: Option<String>,
    /// Authentication used for admin API operations
    /// If not specified, the cluster is assumed to allow anonymous access
    #[serde(default)]
    pub authentication: Option<AuthenticationConfig>,
}

/// Authentication configuration for a Pulsar cluster
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", tag = "authType")]
pub enum AuthenticationConfig {
    /// JWT token authentication, read from a Kubernetes secret
    #[serde(rename_all = "camelCase")]
    Token {
        /// Secret name containing the token
        secret_name: String,
        /// Key in the secret containing the token
        /// Defaults to "token" if not specified
        #[serde(default = "default_token_secret_key")]
        secret_key: String,
    },
    /// OAuth2 client-credentials authentication
    #[serde(rename = "oauth2", rename_all = "camelCase")]
    OAuth2 {
        /// OAuth2 issuer URL
        issuer_endpoint: String,
        /// OAuth2 client ID
        client_id: String,
        /// Audience for the issued token
        audience: String,
        /// Secret name containing the private key used for the
        /// client-credentials flow
        key_secret_name: String,
    },
}

fn default_token_secret_key() -> String {
    "token".to_string()
}

// A connection has no connection of its own to re-queue.
impl HasConnectionRef for PulsarConnection {
    fn connection_ref(&self) -> Option<&ConnectionRef> {
        None
    }
}
