//! NAS / NGAP message metrics for the AMF.
//!
//! All metric groups are owned by [`AmfMetrics`], which is constructed once and registered
//! in a [`Registry`] explicitly:
//!
//! ```
//! use amf_metrics::{AmfMetrics, NgapMessageType, Status};
//!
//! let metrics = AmfMetrics::default();
//! let registry = metrics.registry();
//! metrics.ngap.record_sent(
//!     NgapMessageType::NgSetupFailure,
//!     Status::Failure,
//!     Some("Misc : Unspecified"),
//!     None,
//! );
//! # drop(registry);
//! ```
//!
//! Cause labels of NGAP messages are produced by lookup functions generated with `cause-codegen`.

// Linter settings.
#![warn(missing_debug_implementations, missing_docs, bare_trait_objects)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use vise::{EncodeLabelSet, EncodeLabelValue, Registry};

pub use crate::{
    communication::{CommunicationMetrics, StatusCode},
    handover::HandoverMetrics,
    nas::{NasMessageType, NasMetrics},
    ngap::{NgapMessageType, NgapMetrics},
};

mod communication;
mod handover;
pub mod nas;
pub mod ngap;

/// Outcome of handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EncodeLabelValue)]
#[metrics(rename_all = "snake_case")]
pub enum Status {
    /// Message was handled successfully.
    Success,
    /// Handling the message failed.
    Failure,
}

impl From<bool> for Status {
    fn from(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// Labels shared by message counters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EncodeLabelSet)]
pub struct MessageLabels {
    /// Message type.
    pub name: &'static str,
    /// Handling outcome.
    pub status: Status,
    /// Failure cause; empty if unknown or not applicable.
    pub cause: String,
}

impl MessageLabels {
    pub(crate) fn new(name: &'static str, status: Status, cause: impl Into<String>) -> Self {
        Self {
            name,
            status,
            cause: cause.into(),
        }
    }
}

/// All AMF metrics.
#[derive(Debug, Default)]
pub struct AmfMetrics {
    /// NAS message metrics.
    pub nas: NasMetrics,
    /// NGAP message metrics.
    pub ngap: NgapMetrics,
    /// Handover procedure metrics.
    pub handover: HandoverMetrics,
    /// Inter-AMF communication metrics.
    pub communication: CommunicationMetrics,
}

impl AmfMetrics {
    /// Registers all metric groups in `registry`. Metrics are shared with the registry,
    /// so values reported afterwards are visible during scraping.
    pub fn register(&self, registry: &mut Registry) {
        registry.register_metrics(&self.nas);
        registry.register_metrics(&self.ngap);
        registry.register_metrics(&self.handover);
        registry.register_metrics(&self.communication);
    }

    /// Creates a registry containing only these metrics.
    pub fn registry(&self) -> Registry {
        let mut registry = Registry::empty();
        self.register(&mut registry);
        registry
    }
}
