use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::binding::VigikCoreBinding;
use crate::binding::biometric::{
    BiometricAvailabilityBindingEnum, BiometricKeystore, BiometricPromptBindingDTO,
    LoginStateBindingEnum,
};
use crate::binding::device::{
    AdapterStateBindingEnum, BluetoothAdapter, DeviceStateBindingDTO, DeviceStateObserver,
    LocationProvider,
};
use crate::binding::nfc::{ApduListener, ApduTransport, NfcHce};
use crate::binding::tag::{
    NdefRecordBindingDTO, ScannedTagBindingDTO, TagBindingDTO, TagListObserver,
};
use crate::error::{BiometricError, BindingError, BluetoothError, LocationError, NfcError};
use crate::{DATABASE_FILE, initialize_core};

struct StaticNfcHce;

#[async_trait::async_trait]
impl NfcHce for StaticNfcHce {
    async fn is_supported(&self) -> Result<bool, NfcError> {
        Ok(true)
    }

    async fn is_enabled(&self) -> Result<bool, NfcError> {
        Ok(false)
    }
}

#[derive(Default)]
struct RecordingTransport {
    responses: Mutex<Vec<Vec<u8>>>,
}

impl ApduTransport for RecordingTransport {
    fn send_response_apdu(&self, response: Vec<u8>) -> Result<(), NfcError> {
        self.responses.lock().unwrap().push(response);
        Ok(())
    }
}

struct EchoListener;

impl ApduListener for EchoListener {
    fn on_command(&self, command: Option<Vec<u8>>) -> Vec<u8> {
        command.unwrap_or_default()
    }
}

struct StaticBluetoothAdapter;

#[async_trait::async_trait]
impl BluetoothAdapter for StaticBluetoothAdapter {
    async fn is_supported(&self) -> Result<bool, BluetoothError> {
        Ok(true)
    }

    async fn state(&self) -> Result<AdapterStateBindingEnum, BluetoothError> {
        Ok(AdapterStateBindingEnum::On)
    }
}

struct DeniedLocationProvider;

#[async_trait::async_trait]
impl LocationProvider for DeniedLocationProvider {
    async fn is_enabled(&self) -> Result<bool, LocationError> {
        Err(LocationError::NotAuthorized)
    }
}

struct AcceptingKeystore;

#[async_trait::async_trait]
impl BiometricKeystore for AcceptingKeystore {
    async fn can_authenticate(&self) -> BiometricAvailabilityBindingEnum {
        BiometricAvailabilityBindingEnum::Available
    }

    async fn authenticate(&self, _prompt: BiometricPromptBindingDTO) -> Result<bool, BiometricError> {
        Ok(true)
    }
}

#[derive(Default)]
struct RecordingTagObserver {
    snapshots: Mutex<Vec<Vec<TagBindingDTO>>>,
}

impl TagListObserver for RecordingTagObserver {
    fn on_tags_changed(&self, tags: Vec<TagBindingDTO>) {
        self.snapshots.lock().unwrap().push(tags);
    }
}

#[derive(Default)]
struct RecordingDeviceObserver {
    states: Mutex<Vec<DeviceStateBindingDTO>>,
}

impl DeviceStateObserver for RecordingDeviceObserver {
    fn on_device_state_changed(&self, state: DeviceStateBindingDTO) {
        self.states.lock().unwrap().push(state);
    }
}

struct TestContext {
    // removed on drop
    dir: tempfile::TempDir,
    transport: Arc<RecordingTransport>,
    core: Arc<VigikCoreBinding>,
}

async fn initialize() -> TestContext {
    initialize_with_config(None).await.unwrap()
}

async fn initialize_with_config(config_json: Option<&str>) -> Result<TestContext, BindingError> {
    let dir = tempfile::tempdir().unwrap();
    let transport = Arc::new(RecordingTransport::default());

    let core = initialize_core(
        dir.path().to_str().unwrap().to_owned(),
        config_json.map(str::to_owned),
        Arc::new(StaticNfcHce),
        transport.clone(),
        Arc::new(StaticBluetoothAdapter),
        Arc::new(DeniedLocationProvider),
        Arc::new(AcceptingKeystore),
    )
    .await?;

    Ok(TestContext {
        dir,
        transport,
        core,
    })
}

async fn wait_until(condition: impl Fn() -> bool) {
    for _ in 0..100 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met in time");
}

fn dummy_tag(timestamp: i64) -> TagBindingDTO {
    TagBindingDTO {
        timestamp,
        uid: vec![0x13, 0x37],
        tech_list: "NfcA".to_string(),
        data: String::new(),
        id: vec![],
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tag_store_with_observer() {
    let TestContext { core, dir: _dir, .. } = initialize().await;

    let observer = Arc::new(RecordingTagObserver::default());
    core.subscribe_tags(observer.clone()).await.unwrap();
    wait_until(|| observer.snapshots.lock().unwrap().len() == 1).await;

    assert_eq!(core.save_tag(dummy_tag(42)).await.unwrap(), 42);
    wait_until(|| {
        observer
            .snapshots
            .lock()
            .unwrap()
            .last()
            .is_some_and(|tags| tags == &vec![dummy_tag(42)])
    })
    .await;

    assert_eq!(core.delete_tag(42).await.unwrap(), 1);
    wait_until(|| {
        observer
            .snapshots
            .lock()
            .unwrap()
            .last()
            .is_some_and(|tags| tags.is_empty())
    })
    .await;

    assert!(matches!(
        core.delete_tag(42).await,
        Err(BindingError::NotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_save_scanned_tag() {
    let TestContext { core, dir: _dir, .. } = initialize().await;

    let tag = core
        .save_scanned_tag(ScannedTagBindingDTO {
            uid: vec![0x04, 0x11],
            tech_list: vec!["android.nfc.tech.IsoDep".to_string()],
            ndef_records: vec![NdefRecordBindingDTO {
                tnf: 0x01,
                r#type: b"T".to_vec(),
                payload: b"\x02frBonjour".to_vec(),
            }],
            id: vec![0x04, 0x11],
        })
        .await
        .unwrap();

    assert_eq!(tag.tech_list, "IsoDep");
    assert_eq!(tag.data, "Bonjour");
    assert_eq!(core.get_tag(tag.timestamp).await.unwrap(), tag);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hce_commands_answered_through_transport() {
    let TestContext {
        core,
        transport,
        dir: _dir,
    } = initialize().await;

    let status = core.get_hce_status().await.unwrap();
    assert!(status.supported);
    assert!(!status.enabled);

    core.hce_process_command(Some(vec![0x00, 0xA4, 0x04, 0x00]))
        .await
        .unwrap();
    core.hce_process_command(None).await.unwrap();

    core.register_apdu_listener(Arc::new(EchoListener))
        .await
        .unwrap();
    core.hce_process_command(Some(vec![0xCA, 0xFE])).await.unwrap();

    core.unregister_apdu_listener().await.unwrap();
    core.hce_process_command(Some(vec![0xCA, 0xFE])).await.unwrap();

    core.hce_deactivated(1).await.unwrap();

    assert_eq!(
        *transport.responses.lock().unwrap(),
        vec![
            vec![0x90, 0x00],
            vec![0x00, 0x00],
            vec![0xCA, 0xFE],
            vec![0x6D, 0x00],
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_device_state() {
    let TestContext { core, dir: _dir, .. } = initialize().await;

    let observer = Arc::new(RecordingDeviceObserver::default());
    core.subscribe_device_state(observer.clone()).await.unwrap();

    let expected = DeviceStateBindingDTO {
        bluetooth_supported: true,
        bluetooth: AdapterStateBindingEnum::On,
        location_enabled: false,
    };
    assert_eq!(core.refresh_device_state().await.unwrap(), expected);
    wait_until(|| observer.states.lock().unwrap().last() == Some(&expected)).await;

    let state = core.on_bluetooth_state_changed(13).await.unwrap();
    assert_eq!(state.bluetooth, AdapterStateBindingEnum::TurningOff);

    assert!(matches!(
        core.on_bluetooth_state_changed(99).await,
        Err(BindingError::ValidationError(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login() {
    let TestContext { core, dir: _dir, .. } = initialize().await;

    assert_eq!(
        core.get_login_state().await.unwrap(),
        LoginStateBindingEnum::LoggedOut
    );

    let state = core
        .login(BiometricPromptBindingDTO {
            title: "Vigik".to_string(),
            subtitle: None,
            negative_button: "Cancel".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(state, LoginStateBindingEnum::LoggedIn);

    assert_eq!(core.logout().await.unwrap(), LoginStateBindingEnum::LoggedOut);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_uninitialize_deletes_database() {
    let TestContext { core, dir, .. } = initialize().await;
    let db_path = dir.path().join(DATABASE_FILE);
    assert!(Path::new(&db_path).exists());

    core.uninitialize(true).await.unwrap();

    assert!(!db_path.exists());
    assert!(matches!(
        core.get_all_tags().await,
        Err(BindingError::Uninitialized)
    ));
    assert!(matches!(
        core.uninitialize(false).await,
        Err(BindingError::Uninitialized)
    ));
}

#[test]
fn test_version() {
    let version = crate::binding::version::VersionBindingDTO::from(vigik_core::VigikCore::version());
    assert!(!version.version.is_empty());
}

#[tokio::test]
async fn test_json_config_overrides_bundled_config() {
    let context = initialize_with_config(Some(
        r#"{"gallery": {"pageSize": 12}}"#,
    ))
    .await
    .unwrap();

    let core = context.core.use_core().await.unwrap();
    assert_eq!(core.config.gallery.page_size, 12);
    assert_eq!(
        core.config.gallery.base_url.as_str(),
        "https://picsum.photos/"
    );
}

#[tokio::test]
async fn test_invalid_json_config_is_rejected() {
    let result = initialize_with_config(Some(r#"{"gallery": {"pageSize": "many"}}"#)).await;
    assert!(matches!(result, Err(BindingError::ConfigValidationError(_))));

    let result = initialize_with_config(Some(r#"{"gallery": {"pageSize": 0}}"#)).await;
    assert!(matches!(result, Err(BindingError::ConfigValidationError(_))));
}
