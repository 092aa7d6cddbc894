//! # Custom Resource Definitions
//!
//! CRD types for the Pulsar Resources Controller.
//!
//! This module contains the `PulsarConnection` resource plus the ten
//! dependent resource kinds that reference one. Every dependent kind
//! declares exactly one [`ConnectionRef`] in its spec and implements
//! [`HasConnectionRef`] so the watch layer can map its events back to the
//! connection it depends on.
//!
//! ## Module Structure
//!
//! - `common.rs` - `ConnectionRef`, shared status types, lifecycle policy
//! - `connection.rs` - `PulsarConnection` (the referenced resource)
//! - one file per dependent kind (`tenant.rs`, `topic.rs`, ...)

mod common;
mod connection;
mod function;
mod geo_replication;
mod namespace;
mod ns_isolation_policy;
mod package;
mod permission;
mod sink;
mod source;
mod tenant;
mod topic;

// Re-export all public types
pub use common::{Condition, ConnectionRef, HasConnectionRef, LifecyclePolicy, ResourceStatus};
pub use connection::{
    AuthenticationConfig, PulsarConnection, PulsarConnectionSpec,
};
pub use function::{PulsarFunction, PulsarFunctionSpec};
pub use geo_replication::{PulsarGeoReplication, PulsarGeoReplicationSpec};
pub use namespace::{PulsarNamespace, PulsarNamespaceSpec};
pub use ns_isolation_policy::{
    AutoFailoverPolicy, PulsarNSIsolationPolicy, PulsarNSIsolationPolicySpec,
};
pub use package::{PulsarPackage, PulsarPackageSpec};
pub use permission::{PermissionResourceType, PulsarPermission, PulsarPermissionSpec};
pub use sink::{PulsarSink, PulsarSinkSpec};
pub use source::{PulsarSource, PulsarSourceSpec};
pub use tenant::{PulsarTenant, PulsarTenantSpec};
pub use topic::{PulsarTopic, PulsarTopicSpec};

/// API group shared by all resources managed by this controller.
pub const API_GROUP: &str = "pulsar.microscaler.io";
