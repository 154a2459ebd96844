use std::sync::Arc;

use url::Url;

use super::dto::RecentEventsDTO;
use super::{ApiResult, fetch_json};
use crate::model::tracker::EventTimers;
use crate::provider::http_client::HttpClient;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait TrackerApi: Send + Sync {
    async fn recent_events(&self) -> ApiResult<EventTimers>;
}

pub struct TrackerApiImpl {
    http_client: Arc<dyn HttpClient>,
    url: Url,
}

impl TrackerApiImpl {
    pub fn new(http_client: Arc<dyn HttpClient>, url: Url) -> Self {
        Self { http_client, url }
    }
}

#[async_trait::async_trait]
impl TrackerApi for TrackerApiImpl {
    async fn recent_events(&self) -> ApiResult<EventTimers> {
        let request = self
            .http_client
            .get(self.url.as_str())
            .header("Accept", "application/json");

        fetch_json::<RecentEventsDTO>(request).await.map(Into::into)
    }
}
