//! # Reconciler
//!
//! Core reconciliation logic for `PulsarConnection` resources.
//!
//! The reconciler:
//! - Validates that the connection declares at least one service URL
//! - Updates resource status with a Ready condition, the observed
//!   generation, and the reconciliation time
//! - Records reconciliation metrics
//!
//! It is fed from two directions: direct watch events on
//! `PulsarConnection`, and requests mapped from dependent-resource events
//! by `connection_ref_mapper`. Either way, reconciliation works only from
//! the current object; it keeps no state between runs.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use kube::api::{Patch, PatchParams};
use kube::{Api, Client, ResourceExt};
use kube_runtime::controller::Action;
use serde_json::json;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::crd::{Condition, PulsarConnection, PulsarConnectionSpec, ResourceStatus};
use crate::metrics;

/// Errors surfaced to the controller's error policy.
#[derive(Debug, Error)]
pub enum ReconcilerError {
    #[error("Kubernetes API error: {0}")]
    KubeApi(#[from] kube::Error),
    #[error("PulsarConnection {0} has no namespace")]
    MissingNamespace(String),
}

/// Reconciler context shared across all reconcile invocations.
#[derive(Clone)]
pub struct Reconciler {
    client: Client,
    requeue_interval: Duration,
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("requeue_interval", &self.requeue_interval)
            .finish_non_exhaustive()
    }
}

impl Reconciler {
    #[must_use]
    pub fn new(client: Client, requeue_interval: Duration) -> Self {
        Self {
            client,
            requeue_interval,
        }
    }

    /// Reconcile a single `PulsarConnection`.
    #[instrument(skip(connection, ctx), fields(name = %connection.name_any()))]
    pub async fn reconcile(
        connection: Arc<PulsarConnection>,
        ctx: Arc<Self>,
    ) -> Result<Action, ReconcilerError> {
        let start = Instant::now();
        metrics::increment_reconciliations();

        let name = connection.name_any();
        let namespace = connection
            .namespace()
            .ok_or_else(|| ReconcilerError::MissingNamespace(name.clone()))?;

        let readiness = check_readiness(&connection.spec);
        if let Readiness::NotReady { reason, message } = &readiness {
            warn!(%name, %namespace, reason, "{message}");
        }

        let status = ResourceStatus {
            conditions: vec![readiness.into_condition()],
            observed_generation: connection.metadata.generation,
            last_reconcile_time: Some(Utc::now().to_rfc3339()),
        };

        let api: Api<PulsarConnection> = Api::namespaced(ctx.client.clone(), &namespace);
        api.patch_status(
            &name,
            &PatchParams::default(),
            &Patch::Merge(json!({ "status": status })),
        )
        .await?;

        metrics::observe_reconciliation_duration(start.elapsed().as_secs_f64());
        info!(%name, %namespace, "reconciled connection");

        Ok(Action::requeue(ctx.requeue_interval))
    }
}

/// Outcome of validating a connection spec.
enum Readiness {
    Ready,
    NotReady {
        reason: &'static str,
        message: String,
    },
}

impl Readiness {
    fn into_condition(self) -> Condition {
        let (status, reason, message) = match self {
            Readiness::Ready => (
                "True",
                "Reconciled",
                "Connection endpoints configured".to_string(),
            ),
            Readiness::NotReady { reason, message } => ("False", reason, message),
        };
        Condition {
            r#type: "Ready".to_string(),
            status: status.to_string(),
            last_transition_time: Some(Utc::now().to_rfc3339()),
            reason: Some(reason.to_string()),
            message: Some(message),
        }
    }
}

fn check_readiness(spec: &PulsarConnectionSpec) -> Readiness {
    let has_admin = spec
        .admin_service_url
        .as_deref()
        .is_some_and(|url| !url.is_empty());
    let has_broker = spec
        .broker_service_url
        .as_deref()
        .is_some_and(|url| !url.is_empty());

    if has_admin || has_broker {
        Readiness::Ready
    } else {
        Readiness::NotReady {
            reason: "MissingServiceUrl",
            message: "Neither adminServiceUrl nor brokerServiceUrl is set".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(admin: Option<&str>, broker: Option<&str>) -> PulsarConnectionSpec {
        PulsarConnectionSpec {
            admin_service_url: admin.map(str::to_string),
            broker_service_url: broker.map(str::to_string),
            cluster_name: None,
            authentication: None,
        }
    }

    #[test]
    fn test_ready_with_admin_url() {
        let readiness = check_readiness(&spec(Some("http://broker:8080"), None));
        let condition = readiness.into_condition();
        assert_eq!(condition.r#type, "Ready");
        assert_eq!(condition.status, "True");
    }

    #[test]
    fn test_ready_with_broker_url_only() {
        let readiness = check_readiness(&spec(None, Some("pulsar://broker:6650")));
        assert_eq!(readiness.into_condition().status, "True");
    }

    #[test]
    fn test_not_ready_without_urls() {
        let condition = check_readiness(&spec(None, None)).into_condition();
        assert_eq!(condition.status, "False");
        assert_eq!(condition.reason.as_deref(), Some("MissingServiceUrl"));
    }

    #[test]
    fn test_not_ready_with_empty_urls() {
        let condition = check_readiness(&spec(Some(""), Some(""))).into_condition();
        assert_eq!(condition.status, "False");
    }

    #[test]
    fn test_error_display_wraps_kube_error() {
        let err = ReconcilerError::MissingNamespace("conn1".to_string());
        assert_eq!(err.to_string(), "PulsarConnection conn1 has no namespace");
    }
}
