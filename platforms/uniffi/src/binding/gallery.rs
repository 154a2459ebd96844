use one_dto_mapper::{From, convert_inner};
use vigik_core::model::gallery::{GalleryImage, GalleryPage};
use vigik_core::provider::remote_api::ApiResult;

use super::VigikCoreBinding;
use crate::error::BindingError;

#[uniffi::export(async_runtime = "tokio")]
impl VigikCoreBinding {
    /// Loads one gallery page, `0` and `1` both load the first page
    #[uniffi::method]
    pub async fn load_gallery_page(
        &self,
        page: u32,
    ) -> Result<GalleryPageResultBindingEnum, BindingError> {
        let core = self.use_core().await?;
        Ok(core.gallery_service.load_page(page).await.into())
    }
}

#[derive(Clone, Debug, uniffi::Enum)]
pub enum GalleryPageResultBindingEnum {
    Success { page: GalleryPageBindingDTO },
    HttpError { code: u16, body: String },
    Exception { message: String },
}

impl From<ApiResult<GalleryPage>> for GalleryPageResultBindingEnum {
    fn from(value: ApiResult<GalleryPage>) -> Self {
        match value {
            ApiResult::Success(page) => Self::Success { page: page.into() },
            ApiResult::HttpError { code, body } => Self::HttpError { code, body },
            ApiResult::Exception(message) => Self::Exception { message },
        }
    }
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(GalleryPage)]
pub struct GalleryPageBindingDTO {
    pub page: u32,
    #[from(with_fn = convert_inner)]
    pub images: Vec<GalleryImageBindingDTO>,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(GalleryImage)]
pub struct GalleryImageBindingDTO {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}
