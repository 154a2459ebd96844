use std::sync::Arc;

use one_dto_mapper::{From, Into, convert_inner};
use vigik_core::model::tag::{NdefRecord, ScannedTag, Tag};

use super::VigikCoreBinding;
use crate::error::BindingError;

/// Receives the full list of stored tags after every change
#[uniffi::export(with_foreign)]
pub trait TagListObserver: Send + Sync {
    fn on_tags_changed(&self, tags: Vec<TagBindingDTO>);
}

#[uniffi::export(async_runtime = "tokio")]
impl VigikCoreBinding {
    /// Stores a tag, returns its timestamp
    #[uniffi::method]
    pub async fn save_tag(&self, tag: TagBindingDTO) -> Result<i64, BindingError> {
        let core = self.use_core().await?;
        Ok(core.tag_service.insert(tag.into()).await?)
    }

    /// Decodes an NFC read event and stores the resulting tag
    #[uniffi::method]
    pub async fn save_scanned_tag(
        &self,
        scanned: ScannedTagBindingDTO,
    ) -> Result<TagBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.tag_service.save_scanned_tag(scanned.into()).await?.into())
    }

    #[uniffi::method]
    pub async fn update_tag(&self, tag: TagBindingDTO) -> Result<u64, BindingError> {
        let core = self.use_core().await?;
        Ok(core.tag_service.update(tag.into()).await?)
    }

    #[uniffi::method]
    pub async fn delete_tag(&self, timestamp: i64) -> Result<u64, BindingError> {
        let core = self.use_core().await?;
        Ok(core.tag_service.delete(timestamp).await?)
    }

    #[uniffi::method]
    pub async fn get_tag(&self, timestamp: i64) -> Result<TagBindingDTO, BindingError> {
        let core = self.use_core().await?;
        Ok(core.tag_service.get_tag(timestamp).await?.into())
    }

    #[uniffi::method]
    pub async fn get_all_tags(&self) -> Result<Vec<TagBindingDTO>, BindingError> {
        let core = self.use_core().await?;
        Ok(convert_inner(core.tag_service.get_all_tags().await?))
    }

    /// Registers an observer, it is called at once with the current list
    #[uniffi::method]
    pub async fn subscribe_tags(
        &self,
        observer: Arc<dyn TagListObserver>,
    ) -> Result<(), BindingError> {
        let core = self.use_core().await?;
        let mut receiver = core.tag_service.subscribe().await?;

        let task = tokio::spawn(async move {
            loop {
                let tags: Vec<Tag> = receiver.borrow_and_update().clone();
                observer.on_tags_changed(convert_inner(tags));

                if receiver.changed().await.is_err() {
                    break;
                }
            }
        });
        self.track_observer(task);

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, From, Into, uniffi::Record)]
#[from(Tag)]
#[into(Tag)]
pub struct TagBindingDTO {
    pub timestamp: i64,
    pub uid: Vec<u8>,
    pub tech_list: String,
    pub data: String,
    pub id: Vec<u8>,
}

#[derive(Clone, Debug, Into, uniffi::Record)]
#[into(ScannedTag)]
pub struct ScannedTagBindingDTO {
    pub uid: Vec<u8>,
    /// Technology class names as reported by `Tag.getTechList()`
    pub tech_list: Vec<String>,
    #[into(with_fn = convert_inner)]
    pub ndef_records: Vec<NdefRecordBindingDTO>,
    pub id: Vec<u8>,
}

#[derive(Clone, Debug, Into, uniffi::Record)]
#[into(NdefRecord)]
pub struct NdefRecordBindingDTO {
    pub tnf: u8,
    pub r#type: Vec<u8>,
    pub payload: Vec<u8>,
}
