use std::sync::Arc;

use super::TrackerService;
use crate::model::tracker::EventTimers;
use crate::provider::remote_api::ApiResult;
use crate::provider::remote_api::tracker::MockTrackerApi;

#[tokio::test]
async fn test_refresh_success() {
    let timers = EventTimers {
        boss_name: Some("Wandering Death".to_string()),
        boss_time: Some(1_700_000_000),
        helltide_time: None,
        legion_time: Some(1_700_000_900),
    };

    let mut tracker_api = MockTrackerApi::default();
    let returned = timers.clone();
    tracker_api
        .expect_recent_events()
        .once()
        .returning(move || ApiResult::Success(returned.clone()));

    let service = TrackerService::new(Arc::new(tracker_api));

    assert_eq!(service.refresh().await, ApiResult::Success(timers));
}

#[tokio::test]
async fn test_refresh_failure_is_not_retried() {
    let mut tracker_api = MockTrackerApi::default();
    tracker_api
        .expect_recent_events()
        .once()
        .returning(|| ApiResult::Exception("connection reset".to_string()));

    let service = TrackerService::new(Arc::new(tracker_api));

    assert_eq!(
        service.refresh().await,
        ApiResult::Exception("connection reset".to_string())
    );
}
