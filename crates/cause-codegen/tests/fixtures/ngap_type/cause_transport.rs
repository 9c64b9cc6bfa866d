pub const CauseTransportPresentTransportResourceUnavailable: i64 = 0;
pub const CauseTransportPresentUnspecified: i64 = 1;

#[derive(Debug, Default)]
pub struct CauseTransport {
    pub value: i64,
}
