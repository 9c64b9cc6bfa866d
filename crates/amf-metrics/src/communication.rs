//! Inter-AMF communication service metrics.

use std::fmt;

use vise::{Counter, EncodeLabelSet, EncodeLabelValue, Family, Metrics};

/// HTTP status code returned by a communication service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EncodeLabelValue, EncodeLabelSet)]
#[metrics(label = "status_code")]
pub struct StatusCode(pub u16);

impl fmt::Display for StatusCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Communication service counters.
#[derive(Debug, Metrics)]
#[metrics(prefix = "amf_communication")]
pub struct CommunicationMetrics {
    /// Total number of UEContextTransfer calls handled by the AMF.
    pub ue_context_transfers: Family<StatusCode, Counter>,
}

impl CommunicationMetrics {
    /// Records a handled UEContextTransfer call.
    pub fn record_ue_context_transfer(&self, status_code: impl Into<StatusCode>) {
        self.ue_context_transfers[&status_code.into()].inc();
    }
}
