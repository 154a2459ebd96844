use std::sync::Arc;

use url::Url;

use super::dto::GalleryImageDTO;
use super::{ApiResult, fetch_json};
use crate::model::gallery::GalleryImage;
use crate::provider::http_client::HttpClient;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait GalleryApi: Send + Sync {
    async fn list_images(&self, page: u32, limit: u32) -> ApiResult<Vec<GalleryImage>>;
}

pub struct GalleryApiImpl {
    http_client: Arc<dyn HttpClient>,
    base_url: Url,
}

impl GalleryApiImpl {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }
}

#[async_trait::async_trait]
impl GalleryApi for GalleryApiImpl {
    async fn list_images(&self, page: u32, limit: u32) -> ApiResult<Vec<GalleryImage>> {
        let url = format!("{}/v2/list", self.base_url.as_str().trim_end_matches('/'));
        let request = match self
            .http_client
            .get(&url)
            .query([("page", page), ("limit", limit)])
        {
            Ok(request) => request,
            Err(error) => return ApiResult::Exception(error.to_string()),
        };

        fetch_json::<Vec<GalleryImageDTO>>(request)
            .await
            .map(|images| images.into_iter().map(Into::into).collect())
    }
}
