#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use binding::VigikCoreBinding;
use binding::biometric::{BiometricKeystore, BiometricKeystoreWrapper};
use binding::device::{
    BluetoothAdapter, BluetoothAdapterWrapper, LocationProvider, LocationProviderWrapper,
};
use binding::nfc::{ApduTransport, ApduTransportWrapper, NfcHce, NfcHceWrapper};
use error::BindingError;
use sql_data_provider::DataLayer;
use utils::{MobileConfig, initialize_tracing};
use vigik_core::config::core_config::{AppConfig, InputFormat};
use vigik_core::{PlatformProviders, VigikCore};

mod binding;
mod error;
mod utils;

#[cfg(test)]
mod test;

uniffi::setup_scaffolding!();

pub(crate) const DATABASE_FILE: &str = "vigik.sqlite";

/// Builds the core on top of the database stored in `data_dir_path`
///
/// `config_json` is merged over the bundled configuration, `VIGIK_` environment
/// variables are merged last. The platform interfaces are implemented by the host
/// application and kept for the lifetime of the returned object.
#[uniffi::export(async_runtime = "tokio")]
pub async fn initialize_core(
    data_dir_path: String,
    config_json: Option<String>,
    nfc_hce: Arc<dyn NfcHce>,
    apdu_transport: Arc<dyn ApduTransport>,
    bluetooth_adapter: Arc<dyn BluetoothAdapter>,
    location_provider: Arc<dyn LocationProvider>,
    biometric_keystore: Arc<dyn BiometricKeystore>,
) -> Result<Arc<VigikCoreBinding>, BindingError> {
    let mut inputs = vec![InputFormat::yaml_str(include_str!(
        "../../../config/config.yml"
    ))];
    if let Some(config_json) = config_json {
        inputs.push(InputFormat::json_str(config_json));
    }
    let config: AppConfig<MobileConfig> = AppConfig::parse(inputs)?;

    initialize_tracing(&config.app.trace_level);

    let db_path = format!("{data_dir_path}/{DATABASE_FILE}");
    let db_url = format!("sqlite:{db_path}?mode=rwc");
    let db_conn = sql_data_provider::db_conn(db_url)
        .await
        .map_err(|e| BindingError::DbErr(e.to_string()))?;

    let core = VigikCore::new(
        Arc::new(DataLayer::build(db_conn)),
        config.core,
        PlatformProviders {
            nfc_hce: Arc::new(NfcHceWrapper(nfc_hce)),
            apdu_transport: Arc::new(ApduTransportWrapper(apdu_transport)),
            bluetooth_adapter: Arc::new(BluetoothAdapterWrapper(bluetooth_adapter)),
            location_provider: Arc::new(LocationProviderWrapper(location_provider)),
            biometric_keystore: Arc::new(BiometricKeystoreWrapper(biometric_keystore)),
        },
    )?;

    tracing::info!(version = %VigikCore::version().version, "Core initialized");
    Ok(Arc::new(VigikCoreBinding::new(core, db_path)))
}
