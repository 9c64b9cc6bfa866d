//! NAS message metrics.

use vise::{Counter, Family, Metrics};

use crate::{MessageLabels, Status};

macro_rules! message_types {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $(
                #[doc = concat!("`", $label, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Returns the label value for this message type.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use message_types;

message_types!(
    /// Type of a 5GMM NAS message.
    NasMessageType {
        AuthenticationRequest => "AuthenticationRequest",
        AuthenticationResponse => "AuthenticationResponse",
        AuthenticationResult => "AuthenticationResult",
        AuthenticationFailure => "AuthenticationFailure",
        AuthenticationReject => "AuthenticationReject",
        RegistrationRequest => "RegistrationRequest",
        RegistrationAccept => "RegistrationAccept",
        RegistrationAcceptTimer => "RegistrationAcceptTimer",
        RegistrationComplete => "RegistrationComplete",
        RegistrationReject => "RegistrationReject",
        UlNasTransport => "ULNASTransport",
        DlNasTransport => "DLNASTransport",
        DeregistrationRequestUeOriginating => "DeregistrationRequestUEOriginatingDeregistration",
        DeregistrationAcceptUeOriginating => "DeregistrationAcceptUEOriginatingDeregistration",
        DeregistrationRequestUeTerminated => "DeregistrationRequestUETerminatedDeregistration",
        DeregistrationAcceptUeTerminated => "DeregistrationAcceptUETerminatedDeregistration",
        ServiceRequest => "ServiceRequest",
        ServiceAccept => "ServiceAccept",
        ServiceReject => "ServiceReject",
        ConfigurationUpdateCommand => "ConfigurationUpdateCommand",
        ConfigurationUpdateCommandTimer => "ConfigurationUpdateCommandTimer",
        ConfigurationUpdateComplete => "ConfigurationUpdateComplete",
        IdentityRequest => "IdentityRequest",
        IdentityResponse => "IdentityResponse",
        Notification => "Notification",
        NotificationTimer => "NotificationTimer",
        NotificationResponse => "NotificationResponse",
        SecurityModeCommand => "SecurityModeCommand",
        SecurityModeComplete => "SecurityModeComplete",
        SecurityModeReject => "SecurityModeReject",
        SecurityProtected5gsNasMessage => "SecurityProtected5GSNASMessage",
        Status5gmm => "Status5GMM",
        Unknown => "Unknown gmm message",
    }
);

/// Free-form causes reported when a NAS message cannot be handled.
pub mod cause {
    /// RAN UE context is missing.
    pub const RAN_UE_NIL: &str = "RanUe is nil";
    /// AMF UE context is missing.
    pub const AMF_UE_NIL: &str = "AmfUe is nil";
    /// RAN context is missing.
    pub const RAN_NIL: &str = "Ran is nil";
    /// NAS PDU is missing.
    pub const NAS_PDU_NIL: &str = "nasPdu is nil";
    /// Authentication context of the UE is missing.
    pub const AUTH_CTX_UE_NIL: &str = "Authentication Context of UE is nil";
    /// Outgoing message could not be built.
    pub const NAS_MSG_BUILD: &str = "Could not build NAS message";
    /// Incoming message could not be decoded.
    pub const DECODE_NAS_MSG: &str = "Could not decode NAS message";
    /// AUSF rejected the authentication.
    pub const AUSF_AUTH: &str = "Ausf Authentication Failure";
    /// HRES* value did not match.
    pub const HRES_AUTH: &str = "HRES* validation failure";
}

/// NAS message counters.
#[derive(Debug, Metrics)]
#[metrics(prefix = "amf_nas")]
pub struct NasMetrics {
    /// Total number of NAS messages received by the AMF.
    pub msg_received: Family<MessageLabels, Counter>,
    /// Total number of NAS messages sent by the AMF.
    pub msg_sent: Family<MessageLabels, Counter>,
}

impl NasMetrics {
    /// Records a received message. `cause` is the 5GMM cause description carried by the message
    /// or a free-form cause (e.g., one of [`cause`](self::cause) constants); it may be empty.
    pub fn record_received(&self, name: NasMessageType, status: Status, cause: &str) {
        let labels = MessageLabels::new(name.as_str(), status, cause);
        self.msg_received[&labels].inc();
    }

    /// Records a sent message. The cause label is `gmm_cause` if present, otherwise
    /// `other_cause`, otherwise empty.
    pub fn record_sent(
        &self,
        name: NasMessageType,
        status: Status,
        gmm_cause: Option<&str>,
        other_cause: Option<&str>,
    ) {
        let cause = gmm_cause.or(other_cause).unwrap_or_default();
        let labels = MessageLabels::new(name.as_str(), status, cause);
        self.msg_sent[&labels].inc();
    }
}
