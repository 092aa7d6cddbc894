//! # CRD Generator
//!
//! Generates Kubernetes CustomResourceDefinition (CRD) YAML from the Rust
//! type definitions, as a multi-document stream covering every kind the
//! controller manages.
//!
//! ## Usage
//!
//! ```bash
//! # Generate CRD YAML
//! cargo run --bin crdgen > config/crd/pulsar-resources.yaml
//!
//! # Generate and apply directly
//! cargo run --bin crdgen | kubectl apply -f -
//! ```

use kube::core::CustomResourceExt;

use pulsar_resources_controller::crd::{
    PulsarConnection, PulsarFunction, PulsarGeoReplication, PulsarNSIsolationPolicy,
    PulsarNamespace, PulsarPackage, PulsarPermission, PulsarSink, PulsarSource, PulsarTenant,
    PulsarTopic,
};

fn main() {
    let crds = [
        PulsarConnection::crd(),
        PulsarTenant::crd(),
        PulsarNamespace::crd(),
        PulsarTopic::crd(),
        PulsarPermission::crd(),
        PulsarGeoReplication::crd(),
        PulsarFunction::crd(),
        PulsarSource::crd(),
        PulsarSink::crd(),
        PulsarPackage::crd(),
        PulsarNSIsolationPolicy::crd(),
    ];

    for crd in crds {
        match serde_yaml::to_string(&crd) {
            Ok(yaml) => {
                println!("---");
                print!("{yaml}");
            }
            Err(e) => {
                eprintln!("Failed to serialize CRD to YAML: {e}");
                std::process::exit(1);
            }
        }
    }
}
