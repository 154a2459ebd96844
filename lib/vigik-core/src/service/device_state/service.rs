use tokio::sync::watch;

use super::DeviceStateService;
use crate::model::device::DeviceState;
use crate::provider::bluetooth::AdapterState;

impl DeviceStateService {
    /// Polls both providers, failures are logged and read as switched off
    pub async fn refresh(&self) -> DeviceState {
        let bluetooth_supported = self
            .bluetooth_adapter
            .is_supported()
            .await
            .unwrap_or_else(|error| {
                tracing::warn!("Failed to check Bluetooth support: {error}");
                false
            });

        let bluetooth = if bluetooth_supported {
            self.bluetooth_adapter
                .state()
                .await
                .unwrap_or_else(|error| {
                    tracing::warn!("Failed to read Bluetooth state: {error}");
                    AdapterState::Off
                })
        } else {
            AdapterState::Off
        };

        let location_enabled = self
            .location_provider
            .is_enabled()
            .await
            .unwrap_or_else(|error| {
                tracing::warn!("Failed to read location state: {error}");
                false
            });

        self.publish(DeviceState {
            bluetooth_supported,
            bluetooth,
            location_enabled,
        })
    }

    pub fn on_bluetooth_state_changed(&self, bluetooth: AdapterState) -> DeviceState {
        self.modify(|state| {
            state.bluetooth = bluetooth;
            // an adapter reporting anything but off exists on this device
            if bluetooth != AdapterState::Off {
                state.bluetooth_supported = true;
            }
        })
    }

    pub fn on_location_changed(&self, location_enabled: bool) -> DeviceState {
        self.modify(|state| state.location_enabled = location_enabled)
    }

    pub fn get_state(&self) -> DeviceState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<DeviceState> {
        self.state.subscribe()
    }

    fn publish(&self, state: DeviceState) -> DeviceState {
        self.modify(|current| *current = state)
    }

    /// Applies `update` under the sender lock, so concurrent callbacks touching
    /// different fields never overwrite each other
    fn modify(&self, update: impl FnOnce(&mut DeviceState)) -> DeviceState {
        let mut snapshot = DeviceState::default();
        let changed = self.state.send_if_modified(|current| {
            let previous = *current;
            update(current);
            snapshot = *current;
            previous != *current
        });

        if changed {
            tracing::debug!(state = ?snapshot, "Device state changed");
        }
        snapshot
    }
}
