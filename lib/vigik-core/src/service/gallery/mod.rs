use std::sync::Arc;

use crate::provider::remote_api::gallery::GalleryApi;

pub mod service;

pub const FIRST_PAGE: u32 = 1;

pub struct GalleryService {
    gallery_api: Arc<dyn GalleryApi>,
    page_size: u32,
}

impl GalleryService {
    pub fn new(gallery_api: Arc<dyn GalleryApi>, page_size: u32) -> Self {
        Self {
            gallery_api,
            page_size,
        }
    }
}
