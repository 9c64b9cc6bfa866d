#[derive(Debug, Default)]
pub struct ProtocolIeSingleContainerCauseExtIes {
    pub list: Vec<u8>,
}
