//! Handover procedure metrics.

use vise::{Counter, Metrics};

/// Xn handover (path switch) counters.
#[derive(Debug, Metrics)]
#[metrics(prefix = "amf_handover")]
pub struct HandoverMetrics {
    /// Total number of PathSwitchRequest NGAP messages received by the AMF.
    pub path_switch_requests: Counter,
    /// Total number of PathSwitchRequest NGAP messages acknowledged by the AMF.
    pub path_switch_request_acknowledges: Counter,
    /// Total number of PathSwitchRequest NGAP messages the AMF failed to handle.
    pub path_switch_request_failures: Counter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_path_switches() {
        let metrics = HandoverMetrics::default();
        metrics.path_switch_requests.inc_by(2);
        metrics.path_switch_request_acknowledges.inc();
        metrics.path_switch_request_failures.inc();

        assert_eq!(metrics.path_switch_requests.get(), 2);
        assert_eq!(metrics.path_switch_request_acknowledges.get(), 1);
        assert_eq!(metrics.path_switch_request_failures.get(), 1);
    }
}
