#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HceStatusDTO {
    pub supported: bool,
    pub enabled: bool,
}
