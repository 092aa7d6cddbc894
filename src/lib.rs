//! Pulsar Resources Controller Library
//!
//! Library for a Kubernetes controller that manages Pulsar platform
//! resources. Dependent resources (tenants, namespaces, topics,
//! permissions, connectors, packages, isolation policies) declare a
//! `connectionRef` pointing at the `PulsarConnection` they are managed
//! through; the controller watches all of them and maps their events back
//! to the referenced connection's reconcile queue.
//!
//! - [`crd`] - the custom resource model
//! - [`controller`] - the connection-reference event mapper and the
//!   connection reconciler
//! - [`metrics`] / [`server`] - Prometheus metrics and the probe endpoint

pub mod controller;
pub mod crd;
pub mod metrics;
pub mod server;
