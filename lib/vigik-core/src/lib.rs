#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::biometric::BiometricKeystore;
use provider::bluetooth::BluetoothAdapter;
use provider::http_client::HttpClient;
use provider::http_client::reqwest_client::ReqwestClient;
use provider::location::LocationProvider;
use provider::nfc::bridge::HceBridge;
use provider::nfc::hce::{ApduTransport, NfcHce};
use provider::remote_api::gallery::GalleryApiImpl;
use provider::remote_api::tracker::TrackerApiImpl;
use repository::DataRepository;
use service::device_state::DeviceStateService;
use service::error::ServiceError;
use service::gallery::GalleryService;
use service::login::LoginService;
use service::nfc::NfcService;
use service::tag::TagService;
use service::tracker::TrackerService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;
pub mod util;

/// Platform services implemented outside of the core
pub struct PlatformProviders {
    pub nfc_hce: Arc<dyn NfcHce>,
    pub apdu_transport: Arc<dyn ApduTransport>,
    pub bluetooth_adapter: Arc<dyn BluetoothAdapter>,
    pub location_provider: Arc<dyn LocationProvider>,
    pub biometric_keystore: Arc<dyn BiometricKeystore>,
}

pub struct VigikCore {
    pub tag_service: TagService,
    pub nfc_service: NfcService,
    pub gallery_service: GalleryService,
    pub tracker_service: TrackerService,
    pub device_state_service: DeviceStateService,
    pub login_service: LoginService,
    pub config: Arc<CoreConfig>,
}

impl VigikCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        providers: PlatformProviders,
    ) -> Result<Self, ServiceError> {
        config.validate()?;

        let http_client: Arc<dyn HttpClient> =
            Arc::new(ReqwestClient::with_timeout(config.http.timeout)?);

        let bridge = Arc::new(HceBridge::new(providers.apdu_transport));

        Ok(Self {
            tag_service: TagService::new(
                data_provider.get_tag_repository(),
                config.tag_store.conflict_policy,
            ),
            nfc_service: NfcService::new(providers.nfc_hce, bridge),
            gallery_service: GalleryService::new(
                Arc::new(GalleryApiImpl::new(
                    http_client.clone(),
                    config.gallery.base_url.clone(),
                )),
                config.gallery.page_size,
            ),
            tracker_service: TrackerService::new(Arc::new(TrackerApiImpl::new(
                http_client,
                config.tracker.url.clone(),
            ))),
            device_state_service: DeviceStateService::new(
                providers.bluetooth_adapter,
                providers.location_provider,
            ),
            login_service: LoginService::new(providers.biometric_keystore),
            config: Arc::new(config),
        })
    }

    pub fn version() -> Version {
        Version {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            rust_version: option_env!("CARGO_PKG_RUST_VERSION")
                .unwrap_or_default()
                .to_owned(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Version {
    pub version: String,
    pub rust_version: String,
}
