use tokio::sync::watch;

use super::LoginService;
use crate::model::device::LoginState;
use crate::provider::biometric::{BiometricAvailability, BiometricPrompt};

impl LoginService {
    /// Runs the biometric prompt and records the outcome
    pub async fn login(&self, prompt: BiometricPrompt) -> LoginState {
        let availability = self.biometric_keystore.can_authenticate().await;
        if availability != BiometricAvailability::Available {
            tracing::info!(?availability, "Biometric login unavailable");
            return self.set_state(LoginState::Unavailable);
        }

        let state = match self.biometric_keystore.authenticate(prompt).await {
            Ok(true) => LoginState::LoggedIn,
            Ok(false) => LoginState::Failed,
            Err(error) => {
                tracing::warn!("Biometric authentication failed: {error}");
                LoginState::Failed
            }
        };

        self.set_state(state)
    }

    pub fn logout(&self) -> LoginState {
        self.set_state(LoginState::LoggedOut)
    }

    pub fn get_state(&self) -> LoginState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.state.subscribe()
    }

    fn set_state(&self, state: LoginState) -> LoginState {
        self.state.send_replace(state);
        state
    }
}
