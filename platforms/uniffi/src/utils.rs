use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Settings of the mobile binding, read from the `app` section of the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct MobileConfig {
    pub trace_level: String,
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            trace_level: "debug".to_string(),
        }
    }
}

/// Installs the global subscriber, on Android log lines go to logcat under the `vigik` tag
pub(crate) fn initialize_tracing(trace_level: &str) {
    let filter = EnvFilter::try_new(trace_level).unwrap_or_else(|_| EnvFilter::new("debug"));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false));

    #[cfg(target_os = "android")]
    let registry = registry.with(tracing_android::layer("vigik").ok());

    // a subscriber may already be installed when the core is initialized again
    if registry.try_init().is_err() {
        tracing::debug!("Tracing already initialized");
    }
}
