//! NGAP message metrics.

use vise::{Counter, Family, Metrics};

use crate::{nas::message_types, MessageLabels, Status};

message_types!(
    /// Type of an NGAP message sent by the AMF.
    NgapMessageType {
        NgSetupResponse => "NGSetupResponse",
        NgSetupFailure => "NGSetupFailure",
        NgReset => "NGReset",
        NgResetAcknowledge => "NGResetAcknowledge",
        DownlinkNasTransport => "DownlinkNasTransport",
        PduSessionResourceReleaseCommand => "PDUSessionResourceReleaseCommand",
        UeContextReleaseCommand => "UEContextReleaseCommand",
        ErrorIndication => "ErrorIndication",
        UeRadioCapabilityCheckRequest => "UERadioCapabilityCheckRequest",
        HandoverCancelAcknowledge => "HandoverCancelAcknowledge",
        PduSessionResourceSetupRequest => "PDUSessionResourceSetupRequest",
        PduSessionResourceModifyConfirm => "PDUSessionResourceModifyConfirm",
        PduSessionResourceModifyRequest => "PDUSessionResourceModifyRequest",
        InitialContextSetupRequest => "InitialContextSetupRequest",
        UeContextModificationRequest => "UEContextModificationRequest",
        HandoverCommand => "HandoverCommand",
        HandoverPreparationFailure => "HandoverPreparationFailure",
        HandoverRequest => "HandoverRequest",
        PathSwitchRequestAcknowledge => "PathSwitchRequestAcknowledge",
        PathSwitchRequestFailure => "PathSwitchRequestFailure",
        DownlinkRanStatusTransfer => "DownlinkRanStatusTransfer",
        Paging => "Paging",
        RerouteNasRequest => "RerouteNasRequest",
        RanConfigurationUpdateAcknowledge => "RanConfigurationUpdateAcknowledge",
        RanConfigurationUpdateFailure => "RanConfigurationUpdateFailure",
        AmfStatusIndication => "AMFStatusIndication",
        OverloadStart => "OverloadStart",
        OverloadStop => "OverloadStop",
        DownlinkRanConfigurationTransfer => "DownlinkRanConfigurationTransfer",
        DownlinkNonUeAssociatedNrppaTransport => "DownlinkNonUEAssociatedNRPPATransport",
        DeactivateTrace => "DeactivateTrace",
        AmfConfigurationUpdate => "AMFConfigurationUpdate",
        DownlinkUeAssociatedNrppaTransport => "DownlinkUEAssociatedNRPPaTransport",
        LocationReportingControl => "LocationReportingControl",
        UeTnlaBindingReleaseRequest => "UETNLABindingReleaseRequest",
    }
);

/// Free-form causes reported when an NGAP message cannot be handled.
pub mod cause {
    /// RAN UE context is missing.
    pub const RAN_UE_NIL: &str = "RanUe is nil";
    /// AMF UE context is missing.
    pub const AMF_UE_NIL: &str = "AmfUe is nil";
    /// RAN context is missing.
    pub const RAN_NIL: &str = "Ran is nil";
    /// GUAMI list is too long.
    pub const GUAMI_LIST_OUT_OF_RANGE: &str = "GUAMI List out of range";
    /// Traffic load reduction indication outside of 1..=99.
    pub const AMF_TRAFFIC_LOAD_REDUCTION_INDICATION_OUT_OF_RANGE: &str =
        "AmfTrafficLoadReductionIndication out of range (should be 1 ~ 99)";
    /// NSSAI list is too long.
    pub const NSSAI_LIST_OUT_OF_RANGE: &str = "NSSAI List out of range";
    /// Area of interest list is too long.
    pub const AOI_LIST_OUT_OF_RANGE: &str = "AOI List out of range";
    /// Location reporting reference ID outside of 1..=64.
    pub const LOCATION_REPORTING_REFERENCE_ID_OUT_OF_RANGE: &str =
        "LocationReportingReferenceIDToBeCancelled out of range (should be 1 ~ 64)";
    /// NRPPa PDU is empty.
    pub const NRPPA_LEN_ZERO: &str = "length of NRPPA-PDU is 0";
    /// NGAP message is missing.
    pub const NGAP_MSG_NIL: &str = "Ngap Message is nil";
    /// Outgoing message could not be built.
    pub const NGAP_MSG_BUILD: &str = "Could not build NAS message";
    /// Cause IE is missing.
    pub const CAUSE_NIL: &str = "Cause present is nil";
    /// Source UE context is missing.
    pub const SOURCE_UE_NIL: &str = "SourceUe is nil";
    /// PDU session resource switched list is too long.
    pub const PDU_SESSION_RESOURCE_SWITCHED_OUT_OF_RANGE: &str =
        "Pdu Session Resource Switched List out of range";
    /// PDU session list is too long.
    pub const PDU_LIST_OUT_OF_RANGE: &str = "Pdu List out of range";
    /// Target RAN context is missing.
    pub const TARGET_RAN_NIL: &str = "targetRan is nil";
    /// Handover Required message is a duplicate.
    pub const HANDOVER_REQUIRED_DUPLICATED: &str = "Handover Required Duplicated";
    /// Source to target transparent container is missing.
    pub const SRC_TO_TARGET_TRANSPARENT_CONTAINER_NIL: &str =
        "Source To Target TransparentContainer is nil";
}

/// NGAP message counters.
#[derive(Debug, Metrics)]
#[metrics(prefix = "amf_ngap")]
pub struct NgapMetrics {
    /// Total number of NGAP messages received by the AMF.
    pub msg_received: Family<MessageLabels, Counter>,
    /// Total number of NGAP messages sent by the AMF.
    pub msg_sent: Family<MessageLabels, Counter>,
}

impl NgapMetrics {
    /// Records a received message. `name` is the procedure name as decoded from the message,
    /// and `cause` is the label of its `Cause` IE (empty if absent).
    pub fn record_received(&self, name: &'static str, status: Status, cause: &str) {
        let labels = MessageLabels::new(name, status, cause);
        self.msg_received[&labels].inc();
    }

    /// Records a sent message. The cause label is the `Cause` IE label if present, otherwise
    /// `other_cause`, otherwise empty.
    pub fn record_sent(
        &self,
        name: NgapMessageType,
        status: Status,
        cause: Option<&str>,
        other_cause: Option<&str>,
    ) {
        let cause = cause.or(other_cause).unwrap_or_default();
        let labels = MessageLabels::new(name.as_str(), status, cause);
        self.msg_sent[&labels].inc();
    }
}
