//! # Controller
//!
//! Reconciliation logic for the Pulsar resources controller.
//!
//! - `connection_ref_mapper` - maps events on dependent resources back to
//!   the `PulsarConnection` they reference
//! - `reconciler` - reconciles `PulsarConnection` resources

pub mod connection_ref_mapper;
pub mod reconciler;
