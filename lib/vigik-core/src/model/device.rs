use crate::provider::bluetooth::AdapterState;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DeviceState {
    pub bluetooth_supported: bool,
    pub bluetooth: AdapterState,
    pub location_enabled: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoginState {
    Unavailable,
    #[default]
    LoggedOut,
    LoggedIn,
    Failed,
}
