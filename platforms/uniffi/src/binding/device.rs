use std::sync::Arc;

use one_dto_mapper::{From, Into};
use vigik_core::model::device::DeviceState;
use vigik_core::provider::bluetooth::AdapterState;

use super::VigikCoreBinding;
use crate::error::{BindingError, BluetoothError, LocationError};

#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait BluetoothAdapter: Send + Sync {
    async fn is_supported(&self) -> Result<bool, BluetoothError>;
    async fn state(&self) -> Result<AdapterStateBindingEnum, BluetoothError>;
}

#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait LocationProvider: Send + Sync {
    async fn is_enabled(&self) -> Result<bool, LocationError>;
}

/// Receives the device state whenever the Bluetooth or location switches change
#[uniffi::export(with_foreign)]
pub trait DeviceStateObserver: Send + Sync {
    fn on_device_state_changed(&self, state: DeviceStateBindingDTO);
}

pub(crate) struct BluetoothAdapterWrapper(pub Arc<dyn BluetoothAdapter>);

#[async_trait::async_trait]
impl vigik_core::provider::bluetooth::BluetoothAdapter for BluetoothAdapterWrapper {
    async fn is_supported(&self) -> Result<bool, vigik_core::provider::bluetooth::BluetoothError> {
        self.0.is_supported().await.map_err(Into::into)
    }

    async fn state(&self) -> Result<AdapterState, vigik_core::provider::bluetooth::BluetoothError> {
        self.0.state().await.map(Into::into).map_err(Into::into)
    }
}

pub(crate) struct LocationProviderWrapper(pub Arc<dyn LocationProvider>);

#[async_trait::async_trait]
impl vigik_core::provider::location::LocationProvider for LocationProviderWrapper {
    async fn is_enabled(&self) -> Result<bool, vigik_core::provider::location::LocationError> {
        self.0.is_enabled().await.map_err(Into::into)
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl VigikCoreBinding {
    /// Polls the platform providers
    #[uniffi::method]
    pub async fn refresh_device_state(&self) -> Result<DeviceStateBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.device_state_service.refresh().await.into())
    }

    /// Mirrors `BluetoothAdapter.ACTION_STATE_CHANGED`, `state` is the `EXTRA_STATE` value
    #[uniffi::method]
    pub async fn on_bluetooth_state_changed(
        &self,
        state: i32,
    ) -> Result<DeviceStateBindingDTO, BindingError> {
        let Some(state) = AdapterState::from_platform(state) else {
            return Err(BindingError::ValidationError(format!(
                "Unknown Bluetooth adapter state {state}"
            )));
        };

        let core = self.use_core().await?;
        Ok(core
            .device_state_service
            .on_bluetooth_state_changed(state)
            .into())
    }

    /// Mirrors `LocationManager.PROVIDERS_CHANGED_ACTION`
    #[uniffi::method]
    pub async fn on_location_changed(
        &self,
        enabled: bool,
    ) -> Result<DeviceStateBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.device_state_service.on_location_changed(enabled).into())
    }

    /// Registers an observer, it is called at once with the current state
    #[uniffi::method]
    pub async fn subscribe_device_state(
        &self,
        observer: Arc<dyn DeviceStateObserver>,
    ) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        let mut receiver = core.device_state_service.subscribe();

        let task = tokio::spawn(async move {
            loop {
                let state: DeviceState = *receiver.borrow_and_update();
                observer.on_device_state_changed(state.into());

                if receiver.changed().await.is_err() {
                    break;
                }
            }
        });
        self.track_observer(task);

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, From, Into, uniffi::Enum)]
#[from(AdapterState)]
#[into(AdapterState)]
pub enum AdapterStateBindingEnum {
    Off,
    TurningOn,
    On,
    TurningOff,
}

#[derive(Clone, Debug, PartialEq, Eq, From, uniffi::Record)]
#[from(DeviceState)]
pub struct DeviceStateBindingDTO {
    pub bluetooth_supported: bool,
    pub bluetooth: AdapterStateBindingEnum,
    pub location_enabled: bool,
}
