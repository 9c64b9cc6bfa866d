pub const CauseMiscPresentControlProcessingOverload: i64 = 0;
pub const CauseMiscPresentNotEnoughUserPlaneProcessingResources: i64 = 1;
pub const CauseMiscPresentHardwareFailure: i64 = 2;
pub const CauseMiscPresentOmIntervention: i64 = 3;
pub const CauseMiscPresentUnknownPLMN: i64 = 4;
pub const CauseMiscPresentUnspecified: i64 = 5;

#[derive(Debug, Default)]
pub struct CauseMisc {
    pub value: i64,
}
