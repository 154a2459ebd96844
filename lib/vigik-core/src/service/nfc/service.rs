use std::sync::Arc;

use super::NfcService;
use super::dto::HceStatusDTO;
use crate::provider::nfc::apdu::ApduResponder;
use crate::provider::nfc::hce::{DeactivationReason, NfcHceHandler};
use crate::service::error::ServiceError;

impl NfcService {
    /// Availability of host-card emulation, the adapter state is only queried on supported devices
    pub async fn get_hce_status(&self) -> Result<HceStatusDTO, ServiceError> {
        let supported = self.nfc_hce.is_supported().await?;
        if !supported {
            return Ok(HceStatusDTO::default());
        }

        Ok(HceStatusDTO {
            supported,
            enabled: self.nfc_hce.is_enabled().await?,
        })
    }

    /// Handler to pass to the platform emulation service
    pub fn hce_handler(&self) -> Arc<dyn NfcHceHandler> {
        self.bridge.clone()
    }

    pub fn handle_command(&self, apdu: Option<Vec<u8>>) {
        self.bridge.handle_command(apdu);
    }

    pub fn on_deactivated(&self, reason: DeactivationReason) {
        self.bridge.on_deactivated(reason);
    }

    pub fn register_responder(&self, responder: Arc<dyn ApduResponder>) {
        self.bridge.register_responder(responder);
    }

    pub fn unregister_responder(&self) {
        self.bridge.unregister_responder();
    }
}
