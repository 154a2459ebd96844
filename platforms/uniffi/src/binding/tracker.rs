use one_dto_mapper::From;
use vigik_core::model::tracker::EventTimers;
use vigik_core::provider::remote_api::ApiResult;

use super::VigikCoreBinding;
use crate::error::BindingError;

#[uniffi::export(async_runtime = "tokio")]
impl VigikCoreBinding {
    #[uniffi::method]
    pub async fn refresh_event_timers(&self) -> Result<EventTimersResultBindingEnum, BindingError> {
        let core = self.use_core().await?;
        Ok(core.tracker_service.refresh().await.into())
    }
}

#[derive(Clone, Debug, uniffi::Enum)]
pub enum EventTimersResultBindingEnum {
    Success { timers: EventTimersBindingDTO },
    HttpError { code: u16, body: String },
    Exception { message: String },
}

impl From<ApiResult<EventTimers>> for EventTimersResultBindingEnum {
    fn from(value: ApiResult<EventTimers>) -> Self {
        match value {
            ApiResult::Success(timers) => Self::Success {
                timers: timers.into(),
            },
            ApiResult::HttpError { code, body } => Self::HttpError { code, body },
            ApiResult::Exception(message) => Self::Exception { message },
        }
    }
}

/// Unix timestamps in seconds, `None` when the tracker has no data for the event
#[derive(Clone, Debug, From, uniffi::Record)]
#[from(EventTimers)]
pub struct EventTimersBindingDTO {
    pub boss_name: Option<String>,
    pub boss_time: Option<i64>,
    pub helltide_time: Option<i64>,
    pub legion_time: Option<i64>,
}
