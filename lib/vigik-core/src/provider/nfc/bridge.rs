use std::sync::{Arc, PoisonError, RwLock};

use super::apdu::{ApduResponder, SelectFileResponder};
use super::hce::{ApduTransport, DeactivationReason, NfcHceHandler};

/// Relays commands from the emulation service to the registered responder and
/// sends the responder's answer back through the transport
pub struct HceBridge {
    transport: Arc<dyn ApduTransport>,
    responder: RwLock<Arc<dyn ApduResponder>>,
}

impl HceBridge {
    pub fn new(transport: Arc<dyn ApduTransport>) -> Self {
        Self {
            transport,
            responder: RwLock::new(Arc::new(SelectFileResponder)),
        }
    }

    pub fn register_responder(&self, responder: Arc<dyn ApduResponder>) {
        *self
            .responder
            .write()
            .unwrap_or_else(PoisonError::into_inner) = responder;
        tracing::debug!("APDU responder registered");
    }

    /// Falls back to [`SelectFileResponder`]
    pub fn unregister_responder(&self) {
        self.register_responder(Arc::new(SelectFileResponder));
    }

    fn responder(&self) -> Arc<dyn ApduResponder> {
        self.responder
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NfcHceHandler for HceBridge {
    fn handle_command(&self, apdu: Option<Vec<u8>>) {
        let command = apdu.as_deref().map(hex::encode);
        let response = self.responder().respond(apdu);
        tracing::debug!(?command, response = %hex::encode(&response), "APDU received");

        if let Err(error) = self.transport.send_response_apdu(response) {
            tracing::warn!(%error, "Failed to send APDU response");
        }
    }

    fn on_deactivated(&self, reason: DeactivationReason) {
        tracing::info!(?reason, "HCE deactivated");
    }
}
