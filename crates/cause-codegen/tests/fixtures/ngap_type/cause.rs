pub const CausePresentNothing: i32 = 0;
pub const CausePresentRadioNetwork: i32 = 1;
pub const CausePresentTransport: i32 = 2;
pub const CausePresentNas: i32 = 3;
pub const CausePresentProtocol: i32 = 4;
pub const CausePresentMisc: i32 = 5;
pub const CausePresentChoiceExtensions: i32 = 6;

#[derive(Debug, Default)]
pub struct Cause {
    pub present: i32,
    pub radio_network: Option<Box<CauseRadioNetwork>>,
    pub transport: Option<Box<CauseTransport>>,
    pub nas: Option<Box<CauseNas>>,
    pub protocol: Option<Box<CauseProtocol>>,
    pub misc: Option<Box<CauseMisc>>,
    pub choice_extensions: Option<Box<ProtocolIeSingleContainerCauseExtIes>>,
}
