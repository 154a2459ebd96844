#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GalleryImage {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GalleryPage {
    pub page: u32,
    pub images: Vec<GalleryImage>,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
}
