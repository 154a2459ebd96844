use std::sync::Arc;

use one_dto_mapper::From;
use vigik_core::provider::nfc::apdu::ApduResponder;
use vigik_core::provider::nfc::hce::DeactivationReason;
use vigik_core::service::nfc::dto::HceStatusDTO;

use super::VigikCoreBinding;
use crate::error::{BindingError, NfcError};

/// Provider of NFC host-card emulation (HCE)
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait NfcHce: Send + Sync {
    async fn is_supported(&self) -> Result<bool, NfcError>;
    async fn is_enabled(&self) -> Result<bool, NfcError>;
}

/// Sends response APDUs back to the reader, `HostApduService.sendResponseApdu`
#[uniffi::export(with_foreign)]
pub trait ApduTransport: Send + Sync {
    fn send_response_apdu(&self, response: Vec<u8>) -> Result<(), NfcError>;
}

/// Custom responder for received commands
#[uniffi::export(with_foreign)]
pub trait ApduListener: Send + Sync {
    /// Returns the response APDU for `command`
    fn on_command(&self, command: Option<Vec<u8>>) -> Vec<u8>;
}

pub(crate) struct NfcHceWrapper(pub Arc<dyn NfcHce>);

#[async_trait::async_trait]
impl vigik_core::provider::nfc::hce::NfcHce for NfcHceWrapper {
    async fn is_supported(&self) -> Result<bool, vigik_core::provider::nfc::NfcError> {
        self.0.is_supported().await.map_err(Into::into)
    }
    async fn is_enabled(&self) -> Result<bool, vigik_core::provider::nfc::NfcError> {
        self.0.is_enabled().await.map_err(Into::into)
    }
}

pub(crate) struct ApduTransportWrapper(pub Arc<dyn ApduTransport>);

impl vigik_core::provider::nfc::hce::ApduTransport for ApduTransportWrapper {
    fn send_response_apdu(
        &self,
        response: Vec<u8>,
    ) -> Result<(), vigik_core::provider::nfc::NfcError> {
        self.0.send_response_apdu(response).map_err(Into::into)
    }
}

struct ApduListenerWrapper(Arc<dyn ApduListener>);

impl ApduResponder for ApduListenerWrapper {
    fn respond(&self, command: Option<Vec<u8>>) -> Vec<u8> {
        self.0.on_command(command)
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl VigikCoreBinding {
    #[uniffi::method]
    pub async fn get_hce_status(&self) -> Result<HceStatusBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.nfc_service.get_hce_status().await?.into())
    }

    /// Entry point of `HostApduService.processCommandApdu`
    ///
    /// The response is delivered through [`ApduTransport`].
    #[uniffi::method]
    pub async fn hce_process_command(&self, command: Option<Vec<u8>>) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        core.nfc_service.handle_command(command);
        Ok(())
    }

    /// Entry point of `HostApduService.onDeactivated`
    #[uniffi::method]
    pub async fn hce_deactivated(&self, reason: i32) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        core.nfc_service
            .on_deactivated(DeactivationReason::from(reason));
        Ok(())
    }

    #[uniffi::method]
    pub async fn register_apdu_listener(
        &self,
        listener: Arc<dyn ApduListener>,
    ) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        core.nfc_service
            .register_responder(Arc::new(ApduListenerWrapper(listener)));
        Ok(())
    }

    /// Restores the default SELECT FILE responder
    #[uniffi::method]
    pub async fn unregister_apdu_listener(&self) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        core.nfc_service.unregister_responder();
        Ok(())
    }
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(HceStatusDTO)]
pub struct HceStatusBindingDTO {
    pub supported: bool,
    pub enabled: bool,
}
