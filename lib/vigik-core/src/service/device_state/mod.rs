use std::sync::Arc;

use tokio::sync::watch;

use crate::model::device::DeviceState;
use crate::provider::bluetooth::BluetoothAdapter;
use crate::provider::location::LocationProvider;

pub mod service;

/// Mirror of the Bluetooth adapter and location switches
pub struct DeviceStateService {
    bluetooth_adapter: Arc<dyn BluetoothAdapter>,
    location_provider: Arc<dyn LocationProvider>,
    state: watch::Sender<DeviceState>,
}

impl DeviceStateService {
    pub fn new(
        bluetooth_adapter: Arc<dyn BluetoothAdapter>,
        location_provider: Arc<dyn LocationProvider>,
    ) -> Self {
        let (state, _) = watch::channel(DeviceState::default());

        Self {
            bluetooth_adapter,
            location_provider,
            state,
        }
    }
}
