//! # Connection Reference Mapper
//!
//! Maps change events on dependent resources (tenants, topics, permissions,
//! ...) to reconcile requests for the `PulsarConnection` they reference.
//!
//! The controller only re-evaluates a `PulsarConnection` when the connection
//! itself changes. When a dependent resource declares `connectionRef` and is
//! created, updated, or deleted, the connection must be re-evaluated too.
//! The functions here close that gap by inverting the reference: given the
//! notified object, they discover which connection it points to and emit a
//! request keyed by that connection's identity.
//!
//! Every function is a pure transform over its argument: no lookups, no
//! retries, no state kept between calls. Deciding what to do with the
//! produced requests (enqueue, index, dedupe) is the watch layer's job.

use kube::runtime::reflector::ObjectRef;
use kube::ResourceExt;

use crate::crd::{ConnectionRef, HasConnectionRef, PulsarConnection};

/// A connection reference with the namespace defaulting rule applied.
///
/// Unlike [`ConnectionRef`], the namespace here is always populated: an
/// unset reference namespace resolves to the namespace of the referencing
/// object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConnectionRef {
    pub name: String,
    pub namespace: String,
}

/// Returns the connection reference declared by `object`, if it is set.
///
/// Kinds that carry no reference and references with an empty `name` both
/// yield `None`. Neither case is an error; both simply produce no request.
pub fn extract_connection_ref<R>(object: &R) -> Option<&ConnectionRef>
where
    R: HasConnectionRef,
{
    object.connection_ref().filter(|reference| !reference.is_unset())
}

/// Returns the fully resolved connection identity for `object`.
///
/// The reference namespace defaults to the object's own namespace, so a
/// reference is same-namespace unless it explicitly says otherwise. The
/// returned namespace is never empty for namespaced objects, which the API
/// server guarantees these are.
pub fn resolve_connection_ref<R>(object: &R) -> Option<ResolvedConnectionRef>
where
    R: HasConnectionRef + ResourceExt,
{
    let reference = extract_connection_ref(object)?;
    let namespace = match reference.namespace.as_deref() {
        Some(ns) if !ns.is_empty() => ns.to_string(),
        _ => object.namespace().unwrap_or_default(),
    };
    Some(ResolvedConnectionRef {
        name: reference.name.clone(),
        namespace,
    })
}

/// Maps a dependent-resource event to reconcile requests for its
/// connection.
///
/// Returns zero or one request. This is the entry point registered with the
/// watch layer for every dependent kind; it is safe to call on create,
/// update, and delete events alike (the object value at delete time is used
/// as-is, no prior state is consulted).
pub fn map_to_requests<R>(object: &R) -> Vec<ObjectRef<PulsarConnection>>
where
    R: HasConnectionRef + ResourceExt,
{
    match resolve_connection_ref(object) {
        Some(info) => vec![ObjectRef::new(&info.name).within(&info.namespace)],
        None => Vec::new(),
    }
}

/// Returns the namespace the object's connection lives in.
///
/// Falls back to the object's own namespace when no reference is declared
/// at all, not only when the reference namespace is unset. Callers use this
/// to answer "where does this object's connection live" without caring
/// whether a reference exists.
pub fn connection_namespace<R>(object: &R) -> String
where
    R: HasConnectionRef + ResourceExt,
{
    match resolve_connection_ref(object) {
        Some(info) => info.namespace,
        None => object.namespace().unwrap_or_default(),
    }
}

/// Builds the canonical index key for a connection identity.
///
/// Both the producer and any consumer of a `connectionRef -> dependents`
/// reverse index must use this encoding; changing the separator or the
/// ordering is a breaking format change for such an index.
#[must_use]
pub fn connection_index_key(name: &str, namespace: &str) -> String {
    format!("{namespace}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{
        AutoFailoverPolicy, PermissionResourceType, PulsarConnectionSpec,
        PulsarFunction, PulsarFunctionSpec, PulsarGeoReplication, PulsarGeoReplicationSpec,
        PulsarNSIsolationPolicy, PulsarNSIsolationPolicySpec, PulsarNamespace,
        PulsarNamespaceSpec, PulsarPackage, PulsarPackageSpec, PulsarPermission,
        PulsarPermissionSpec, PulsarSink, PulsarSinkSpec, PulsarSource, PulsarSourceSpec,
        PulsarTenant, PulsarTenantSpec, PulsarTopic, PulsarTopicSpec,
    };

    fn conn_ref(name: &str, namespace: Option<&str>) -> ConnectionRef {
        ConnectionRef {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
        }
    }

    fn in_namespace<R: ResourceExt>(mut object: R, namespace: &str) -> R {
        object.meta_mut().namespace = Some(namespace.to_string());
        object
    }

    fn topic(name: &str, namespace: &str, reference: ConnectionRef) -> PulsarTopic {
        in_namespace(
            PulsarTopic::new(
                name,
                PulsarTopicSpec {
                    connection_ref: reference,
                    name: format!("persistent://public/default/{name}"),
                    persistent: true,
                    partitions: None,
                    max_producers: None,
                    max_consumers: None,
                    lifecycle_policy: None,
                },
            ),
            namespace,
        )
    }

    #[test]
    fn test_extract_from_tenant() {
        let tenant = PulsarTenant::new(
            "t",
            PulsarTenantSpec {
                connection_ref: conn_ref("conn1", None),
                admin_roles: None,
                allowed_clusters: None,
                lifecycle_policy: None,
            },
        );
        assert_eq!(extract_connection_ref(&tenant).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_namespace() {
        let ns = PulsarNamespace::new(
            "n",
            PulsarNamespaceSpec {
                connection_ref: conn_ref("conn1", None),
                name: "analytics/ingest".to_string(),
                bundles: None,
                message_ttl: None,
                retention_time: None,
                retention_size: None,
                max_producers_per_topic: None,
                max_consumers_per_topic: None,
                lifecycle_policy: None,
            },
        );
        assert_eq!(extract_connection_ref(&ns).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_topic() {
        let t = topic("orders", "ns1", conn_ref("conn1", None));
        assert_eq!(extract_connection_ref(&t).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_permission() {
        let permission = PulsarPermission::new(
            "p",
            PulsarPermissionSpec {
                connection_ref: conn_ref("conn1", None),
                resource_type: PermissionResourceType::Namespace,
                resource_name: "analytics/ingest".to_string(),
                roles: vec!["reader".to_string()],
                actions: Some(vec!["consume".to_string()]),
                lifecycle_policy: None,
            },
        );
        assert_eq!(extract_connection_ref(&permission).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_geo_replication() {
        let geo = PulsarGeoReplication::new(
            "g",
            PulsarGeoReplicationSpec {
                connection_ref: conn_ref("conn-local", None),
                destination_connection_ref: conn_ref("conn-remote", Some("other-ns")),
                lifecycle_policy: None,
            },
        );
        // Mapping follows the local connection, not the destination.
        assert_eq!(extract_connection_ref(&geo).unwrap().name, "conn-local");
    }

    #[test]
    fn test_extract_from_function() {
        let function = PulsarFunction::new(
            "f",
            PulsarFunctionSpec {
                connection_ref: conn_ref("conn1", None),
                tenant: "analytics".to_string(),
                namespace: "ingest".to_string(),
                class_name: Some("org.example.WordCount".to_string()),
                jar: Some("function://analytics/ingest/wordcount@v1".to_string()),
                inputs: vec!["persistent://analytics/ingest/raw".to_string()],
                output: None,
                parallelism: None,
            },
        );
        assert_eq!(extract_connection_ref(&function).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_source() {
        let source = PulsarSource::new(
            "s",
            PulsarSourceSpec {
                connection_ref: conn_ref("conn1", None),
                tenant: "analytics".to_string(),
                namespace: "ingest".to_string(),
                archive: "builtin://kafka".to_string(),
                topic_name: "persistent://analytics/ingest/raw".to_string(),
                class_name: None,
                configs: None,
                parallelism: None,
            },
        );
        assert_eq!(extract_connection_ref(&source).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_sink() {
        let sink = PulsarSink::new(
            "s",
            PulsarSinkSpec {
                connection_ref: conn_ref("conn1", None),
                tenant: "analytics".to_string(),
                namespace: "ingest".to_string(),
                archive: "builtin://elastic-search".to_string(),
                inputs: vec!["persistent://analytics/ingest/enriched".to_string()],
                class_name: None,
                configs: None,
                parallelism: None,
            },
        );
        assert_eq!(extract_connection_ref(&sink).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_package() {
        let package = PulsarPackage::new(
            "p",
            PulsarPackageSpec {
                connection_ref: conn_ref("conn1", None),
                package_url: "function://analytics/ingest/wordcount@v1".to_string(),
                file_url: "https://releases.example.com/wordcount.jar".to_string(),
                description: None,
                contact: None,
                properties: None,
                lifecycle_policy: None,
            },
        );
        assert_eq!(extract_connection_ref(&package).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_ns_isolation_policy() {
        let policy = PulsarNSIsolationPolicy::new(
            "iso",
            PulsarNSIsolationPolicySpec {
                connection_ref: conn_ref("conn1", None),
                name: "critical".to_string(),
                cluster: "us-east".to_string(),
                namespaces: vec!["analytics/.*".to_string()],
                primary: vec!["broker-[1-3].*".to_string()],
                secondary: None,
                auto_failover_policy: Some(AutoFailoverPolicy {
                    policy_type: "min_available".to_string(),
                    min_limit: Some(2),
                    usage_threshold: None,
                }),
            },
        );
        assert_eq!(extract_connection_ref(&policy).unwrap().name, "conn1");
    }

    #[test]
    fn test_extract_from_connection_is_absent() {
        let conn = PulsarConnection::new(
            "conn1",
            PulsarConnectionSpec {
                admin_service_url: Some("http://broker:8080".to_string()),
                broker_service_url: None,
                cluster_name: None,
                authentication: None,
            },
        );
        assert!(extract_connection_ref(&conn).is_none());
    }

    #[test]
    fn test_empty_name_reference_is_absent() {
        // A namespace alone does not make a reference; the name decides.
        let t = topic("orders", "ns1", conn_ref("", Some("ns2")));
        assert!(extract_connection_ref(&t).is_none());
        assert!(resolve_connection_ref(&t).is_none());
        assert!(map_to_requests(&t).is_empty());
    }

    #[test]
    fn test_resolve_defaults_to_object_namespace() {
        let t = topic("orders", "ns1", conn_ref("conn1", None));
        let info = resolve_connection_ref(&t).unwrap();
        assert_eq!(info.name, "conn1");
        assert_eq!(info.namespace, "ns1");
    }

    #[test]
    fn test_resolve_treats_empty_namespace_as_unset() {
        let t = topic("orders", "ns1", conn_ref("conn1", Some("")));
        let info = resolve_connection_ref(&t).unwrap();
        assert_eq!(info.namespace, "ns1");
    }

    #[test]
    fn test_resolve_honors_cross_namespace_reference() {
        let t = topic("orders", "ns-a", conn_ref("conn1", Some("ns-b")));
        let info = resolve_connection_ref(&t).unwrap();
        assert_eq!(info.namespace, "ns-b");
    }

    #[test]
    fn test_map_to_requests_single_request() {
        let t = topic("t1", "ns1", conn_ref("conn1", None));
        let requests = map_to_requests(&t);
        assert_eq!(requests.len(), 1);
        let expected = ObjectRef::new("conn1").within("ns1");
        assert_eq!(requests[0], expected);
    }

    #[test]
    fn test_map_to_requests_cross_namespace() {
        let permission = in_namespace(
            PulsarPermission::new(
                "p1",
                PulsarPermissionSpec {
                    connection_ref: conn_ref("conn2", Some("ns2")),
                    resource_type: PermissionResourceType::Topic,
                    resource_name: "persistent://analytics/ingest/orders".to_string(),
                    roles: vec!["writer".to_string()],
                    actions: Some(vec!["produce".to_string()]),
                    lifecycle_policy: None,
                },
            ),
            "ns1",
        );
        let requests = map_to_requests(&permission);
        assert_eq!(requests, vec![ObjectRef::new("conn2").within("ns2")]);
    }

    #[test]
    fn test_map_to_requests_unsupported_kind_is_empty() {
        let conn = in_namespace(
            PulsarConnection::new("conn1", PulsarConnectionSpec {
                admin_service_url: None,
                broker_service_url: None,
                cluster_name: None,
                authentication: None,
            }),
            "ns1",
        );
        assert!(map_to_requests(&conn).is_empty());
    }

    #[test]
    fn test_map_to_requests_is_idempotent() {
        let t = topic("t1", "ns1", conn_ref("conn1", None));
        assert_eq!(map_to_requests(&t), map_to_requests(&t));
    }

    #[test]
    fn test_connection_namespace_follows_reference() {
        let t = topic("orders", "ns-a", conn_ref("conn1", Some("ns-b")));
        assert_eq!(connection_namespace(&t), "ns-b");
    }

    #[test]
    fn test_connection_namespace_falls_back_without_reference() {
        let conn = in_namespace(
            PulsarConnection::new("conn1", PulsarConnectionSpec {
                admin_service_url: None,
                broker_service_url: None,
                cluster_name: None,
                authentication: None,
            }),
            "ns1",
        );
        assert_eq!(connection_namespace(&conn), "ns1");
    }

    #[test]
    fn test_connection_index_key_format() {
        assert_eq!(connection_index_key("foo", "bar"), "bar/foo");
    }
}
