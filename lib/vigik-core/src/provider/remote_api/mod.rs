use serde::de::DeserializeOwned;

use super::http_client::RequestBuilder;

mod dto;
pub mod gallery;
pub mod tracker;


/// Outcome of a remote call, errors are values rather than failures
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    HttpError { code: u16, body: String },
    Exception(String),
}

impl<T> ApiResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::Success(value) => ApiResult::Success(f(value)),
            Self::HttpError { code, body } => ApiResult::HttpError { code, body },
            Self::Exception(message) => ApiResult::Exception(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

pub(crate) async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(error) => return ApiResult::Exception(error.to_string()),
    };

    if !response.status.is_success() {
        return ApiResult::HttpError {
            code: response.status.0,
            body: response.body_text(),
        };
    }

    match response.json() {
        Ok(value) => ApiResult::Success(value),
        Err(error) => ApiResult::Exception(error.to_string()),
    }
}
