use super::{FIRST_PAGE, GalleryService};
use crate::model::gallery::GalleryPage;
use crate::provider::remote_api::ApiResult;

impl GalleryService {
    /// Loads one page of the gallery together with the keys of its neighbours
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number, `0` loads the first page
    pub async fn load_page(&self, page: u32) -> ApiResult<GalleryPage> {
        let page = page.max(FIRST_PAGE);

        let result = self.gallery_api.list_images(page, self.page_size).await;
        if let ApiResult::HttpError { code, .. } = &result {
            tracing::warn!("Gallery page {page} failed with status {code}");
        }

        result.map(|images| GalleryPage {
            page,
            prev_page: (page > FIRST_PAGE).then_some(page - 1),
            next_page: page.checked_add(1).filter(|_| !images.is_empty()),
            images,
        })
    }
}
