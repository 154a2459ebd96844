use std::sync::Arc;

use tokio::sync::watch;

use crate::model::device::LoginState;
use crate::provider::biometric::BiometricKeystore;

pub mod service;

pub struct LoginService {
    biometric_keystore: Arc<dyn BiometricKeystore>,
    state: watch::Sender<LoginState>,
}

impl LoginService {
    pub fn new(biometric_keystore: Arc<dyn BiometricKeystore>) -> Self {
        let (state, _) = watch::channel(LoginState::default());

        Self {
            biometric_keystore,
            state,
        }
    }
}
