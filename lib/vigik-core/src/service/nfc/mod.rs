use std::sync::Arc;

use crate::provider::nfc::bridge::HceBridge;
use crate::provider::nfc::hce::NfcHce;

pub mod dto;
pub mod service;

pub struct NfcService {
    nfc_hce: Arc<dyn NfcHce>,
    bridge: Arc<HceBridge>,
}

impl NfcService {
    pub fn new(nfc_hce: Arc<dyn NfcHce>, bridge: Arc<HceBridge>) -> Self {
        Self { nfc_hce, bridge }
    }
}
