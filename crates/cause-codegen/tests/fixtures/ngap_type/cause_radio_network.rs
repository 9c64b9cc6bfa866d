pub const CauseRadioNetworkPresentUnspecified: i64 = 0;
pub const CauseRadioNetworkPresentTxnrelocoverallExpiry: i64 = 1;
pub const CauseRadioNetworkPresentSuccessfulHandover: i64 = 2;
pub const CauseRadioNetworkPresentReleaseDueToNgranGeneratedReason: i64 = 3;
pub const CauseRadioNetworkPresentHandoverCancelled: i64 = 5;
pub const CauseRadioNetworkPresentUnknownPDUSessionID: i64 = 10;

#[derive(Debug, Default)]
pub struct CauseRadioNetwork {
    pub value: i64,
}
