// No values are declared for this variant.
#[derive(Debug, Default)]
pub struct CauseNas {
    pub value: i64,
}
