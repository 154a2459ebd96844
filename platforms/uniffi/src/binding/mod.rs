use std::sync::{Mutex, PoisonError};

use tokio::fs;
use tokio::sync::{RwLock, RwLockReadGuard};
use tokio::task::JoinHandle;
use vigik_core::VigikCore;

use crate::error::BindingError;

pub mod biometric;
pub mod device;
pub mod gallery;
pub mod nfc;
pub mod tag;
pub mod tracker;
pub mod version;

#[derive(uniffi::Object)]
pub struct VigikCoreBinding {
    inner: RwLock<Option<VigikCore>>,
    pub(crate) db_path: String,
    // tasks forwarding observable state to registered observers
    observer_tasks: Mutex<Vec<JoinHandle<()>>>,
}

#[uniffi::export(async_runtime = "tokio")]
impl VigikCoreBinding {
    /// Releases the core, stops all observers and optionally deletes the stored tags
    #[uniffi::method]
    pub async fn uninitialize(&self, delete_data: bool) -> Result<(), BindingError> {
        let mut guard = self.inner.write().await;
        if guard.take().is_none() {
            return Err(BindingError::Uninitialized);
        }

        for task in self
            .observer_tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
        {
            task.abort();
        }

        if !delete_data {
            return Ok(());
        }

        fs::remove_file(&self.db_path).await?;
        Ok(())
    }
}

impl VigikCoreBinding {
    pub(crate) fn new(core: VigikCore, db_path: String) -> Self {
        Self {
            inner: RwLock::new(Some(core)),
            db_path,
            observer_tasks: Mutex::new(vec![]),
        }
    }

    /// helper function to get shared access to the initialized core
    /// fails if not initialized
    pub(crate) async fn use_core(&self) -> Result<RwLockReadGuard<'_, VigikCore>, BindingError> {
        let guard = self.inner.read().await;
        RwLockReadGuard::try_map(guard, |core| core.as_ref())
            .map_err(|_| BindingError::Uninitialized)
    }

    pub(crate) fn track_observer(&self, task: JoinHandle<()>) {
        let mut tasks = self
            .observer_tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|task| !task.is_finished());
        tasks.push(task);
    }
}
