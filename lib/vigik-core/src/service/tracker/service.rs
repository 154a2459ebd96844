use super::TrackerService;
use crate::model::tracker::EventTimers;
use crate::provider::remote_api::ApiResult;

impl TrackerService {
    /// Fetches the current event timers, a failed call is not retried
    pub async fn refresh(&self) -> ApiResult<EventTimers> {
        let result = self.tracker_api.recent_events().await;

        match &result {
            ApiResult::Success(timers) => tracing::debug!(?timers, "Event timers refreshed"),
            ApiResult::HttpError { code, .. } => {
                tracing::warn!("Event tracker failed with status {code}")
            }
            ApiResult::Exception(message) => tracing::warn!("Event tracker failed: {message}"),
        }

        result
    }
}
