pub const CauseProtocolPresentTransferSyntaxError: i64 = 0;
pub const CauseProtocolPresentAbstractSyntaxErrorReject: i64 = 1;
pub const CauseProtocolPresentSemanticError: i64 = 5;
pub const CauseProtocolPresentUnspecified: i64 = 7;
pub const MaxCauseProtocolValue: i64 = 7;

#[derive(Debug, Default)]
pub struct CauseProtocol {
    pub value: i64,
}
