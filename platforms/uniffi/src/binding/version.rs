use one_dto_mapper::From;
use vigik_core::{Version, VigikCore};

use super::VigikCoreBinding;

#[uniffi::export]
impl VigikCoreBinding {
    #[uniffi::method]
    pub fn version(&self) -> VersionBindingDTO {
        VigikCore::version().into()
    }
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(Version)]
pub struct VersionBindingDTO {
    pub version: String,
    pub rust_version: String,
}
