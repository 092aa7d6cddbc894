//! # Pulsar Resources Controller
//!
//! A Kubernetes controller that manages Pulsar platform resources against a
//! `PulsarConnection`.
//!
//! ## Overview
//!
//! 1. **Watching connections** - Reconciles `PulsarConnection` resources
//!    (endpoint validation, status conditions)
//! 2. **Watching dependents** - Watches the ten dependent resource kinds
//!    (tenants, namespaces, topics, permissions, geo-replication links,
//!    functions, sources, sinks, packages, isolation policies)
//! 3. **Reference mapping** - Every dependent event is mapped back to the
//!    connection it references, so a change to a dependent re-queues its
//!    connection even though the connection itself did not change
//! 4. **Prometheus metrics / health probes** - HTTP endpoints for
//!    monitoring, liveness, and readiness
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=pulsar_resources_controller=debug pulsar-resources-controller \
//!     --metrics-port 8080 --watch-namespace messaging
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use futures::StreamExt;
use k8s_openapi::NamespaceResourceScope;
use kube::runtime::reflector::ObjectRef;
use kube::{Api, Client, ResourceExt};
use kube_runtime::{controller::Action, watcher, Controller};
use tracing::{debug, error, info};

use pulsar_resources_controller::controller::connection_ref_mapper;
use pulsar_resources_controller::controller::reconciler::Reconciler;
use pulsar_resources_controller::crd::{
    HasConnectionRef, PulsarConnection, PulsarFunction, PulsarGeoReplication,
    PulsarNSIsolationPolicy, PulsarNamespace, PulsarPackage, PulsarPermission, PulsarSink,
    PulsarSource, PulsarTenant, PulsarTopic,
};
use pulsar_resources_controller::metrics;
use pulsar_resources_controller::server::{start_server, ServerState};

/// Command-line options for the controller binary.
#[derive(Parser, Debug)]
#[command(name = "pulsar-resources-controller", version, about)]
struct Args {
    /// Port for the metrics and probe HTTP server
    #[arg(long, env = "METRICS_PORT", default_value_t = 8080)]
    metrics_port: u16,
    /// Restrict watches to a single namespace instead of the whole cluster
    #[arg(long, env = "WATCH_NAMESPACE")]
    watch_namespace: Option<String>,
    /// Seconds between periodic re-reconciliations of a healthy connection
    #[arg(long, env = "REQUEUE_INTERVAL_SECS", default_value_t = 300)]
    requeue_interval_secs: u64,
}

/// Build an Api for `K` covering either one namespace or the whole cluster.
fn scoped_api<K>(client: &Client, namespace: Option<&str>) -> Api<K>
where
    K: kube::Resource<Scope = NamespaceResourceScope>,
    K::DynamicType: Default,
{
    match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    }
}

/// Watch mapper for one dependent kind: translate the event into requests
/// for the referenced connection and record the outcome.
fn mapped_by_connection<K>(kind: &'static str) -> impl Fn(K) -> Vec<ObjectRef<PulsarConnection>>
where
    K: HasConnectionRef + ResourceExt,
{
    move |object| {
        let requests = connection_ref_mapper::map_to_requests(&object);
        metrics::observe_mapped_requests(kind, requests.len());
        if requests.is_empty() {
            debug!(kind, name = %object.name_any(), "event carries no connection reference");
        }
        requests
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulsar_resources_controller=info".into()),
        )
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("BUILD_GIT_HASH"),
        built = env!("BUILD_DATETIME"),
        "Starting Pulsar Resources Controller"
    );

    metrics::register_metrics()?;

    // Start HTTP server for metrics and probes
    let server_state = Arc::new(ServerState::default());
    let probe_state = server_state.clone();
    tokio::spawn(async move {
        if let Err(e) = start_server(args.metrics_port, probe_state).await {
            error!("HTTP server error: {e}");
        }
    });

    // Create Kubernetes client
    let client = Client::try_default().await?;
    let watch_namespace = args.watch_namespace.as_deref();
    if let Some(ns) = watch_namespace {
        info!(namespace = ns, "Watching a single namespace");
    }

    let connections: Api<PulsarConnection> = scoped_api(&client, watch_namespace);
    let reconciler = Arc::new(Reconciler::new(
        client.clone(),
        Duration::from_secs(args.requeue_interval_secs),
    ));

    // The connection controller re-queues a PulsarConnection on its own
    // events and on any dependent-resource event that references it.
    let wc = || watcher::Config::default();
    let controller = Controller::new(connections, wc().any_semantic())
        .shutdown_on_signal()
        .watches(
            scoped_api::<PulsarTenant>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarTenant"),
        )
        .watches(
            scoped_api::<PulsarNamespace>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarNamespace"),
        )
        .watches(
            scoped_api::<PulsarTopic>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarTopic"),
        )
        .watches(
            scoped_api::<PulsarPermission>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarPermission"),
        )
        .watches(
            scoped_api::<PulsarGeoReplication>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarGeoReplication"),
        )
        .watches(
            scoped_api::<PulsarFunction>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarFunction"),
        )
        .watches(
            scoped_api::<PulsarSource>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarSource"),
        )
        .watches(
            scoped_api::<PulsarSink>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarSink"),
        )
        .watches(
            scoped_api::<PulsarPackage>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarPackage"),
        )
        .watches(
            scoped_api::<PulsarNSIsolationPolicy>(&client, watch_namespace),
            wc(),
            mapped_by_connection("PulsarNSIsolationPolicy"),
        );

    // Mark as ready
    server_state.set_ready(true);

    controller
        .run(
            Reconciler::reconcile,
            |connection, error, _ctx| {
                error!(
                    "Reconciliation error for {}: {error:?}",
                    connection.name_any()
                );
                metrics::increment_reconciliation_errors();
                Action::requeue(Duration::from_secs(60))
            },
            reconciler,
        )
        .for_each(|_| std::future::ready(()))
        .await;

    info!("Controller stopped");

    Ok(())
}
