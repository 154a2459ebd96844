use std::sync::Arc;

use one_dto_mapper::{From, Into};
use vigik_core::model::device::LoginState;
use vigik_core::provider::biometric::{BiometricAvailability, BiometricPrompt};

use super::VigikCoreBinding;
use crate::error::{BiometricError, BindingError};

/// Biometric authentication backed by a keystore key, `BiometricPrompt` on Android
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait BiometricKeystore: Send + Sync {
    async fn can_authenticate(&self) -> BiometricAvailabilityBindingEnum;

    /// `false` when the biometric was not recognised
    async fn authenticate(&self, prompt: BiometricPromptBindingDTO) -> Result<bool, BiometricError>;
}

pub(crate) struct BiometricKeystoreWrapper(pub Arc<dyn BiometricKeystore>);

#[async_trait::async_trait]
impl vigik_core::provider::biometric::BiometricKeystore for BiometricKeystoreWrapper {
    async fn can_authenticate(&self) -> BiometricAvailability {
        self.0.can_authenticate().await.into()
    }

    async fn authenticate(
        &self,
        prompt: BiometricPrompt,
    ) -> Result<bool, vigik_core::provider::biometric::BiometricError> {
        self.0.authenticate(prompt.into()).await.map_err(Into::into)
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl VigikCoreBinding {
    #[uniffi::method]
    pub async fn login(
        &self,
        prompt: BiometricPromptBindingDTO,
    ) -> Result<LoginStateBindingEnum, BindingError> {
        let core = self.use_core().await?;
        Ok(core.login_service.login(prompt.into()).await.into())
    }

    #[uniffi::method]
    pub async fn logout(&self) -> Result<LoginStateBindingEnum, BindingError> {
        let core = self.use_core().await?;
        Ok(core.login_service.logout().into())
    }

    #[uniffi::method]
    pub async fn get_login_state(&self) -> Result<LoginStateBindingEnum, BindingError> {
        let core = self.use_core().await?;
        Ok(core.login_service.get_state().into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Into, uniffi::Enum)]
#[into(BiometricAvailability)]
pub enum BiometricAvailabilityBindingEnum {
    Available,
    NoHardware,
    HardwareUnavailable,
    NoneEnrolled,
    SecurityUpdateRequired,
}

#[derive(Clone, Debug, PartialEq, Eq, From, Into, uniffi::Record)]
#[from(BiometricPrompt)]
#[into(BiometricPrompt)]
pub struct BiometricPromptBindingDTO {
    pub title: String,
    pub subtitle: Option<String>,
    pub negative_button: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, From, uniffi::Enum)]
#[from(LoginState)]
pub enum LoginStateBindingEnum {
    Unavailable,
    LoggedOut,
    LoggedIn,
    Failed,
}
