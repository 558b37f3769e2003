use std::convert::Infallible;

use rocket::{
    http::Status,
    request::{self, FromRequest, Outcome},
    response::{self, Responder},
    serde::json::Json,
    Request,
};
use serde_derive::Serialize;

use crate::{
    error::{Error, FareError},
    logerr,
};

const CC: &str = "Web";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error answered as `{"error": "..."}` with a matching status code
#[derive(Debug)]
pub struct ApiError {
    pub status: Status,
    pub message: String,
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl ApiError {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(message) => ApiError::new(Status::BadRequest, message),
            Error::Fare(fare) => fare.into(),
            Error::GalleryNotFound => {
                ApiError::new(Status::InternalServerError, "Gallery folder not found")
            }
            other => {
                logerr!(target: CC, "{}", other);
                ApiError::new(Status::InternalServerError, "Internal server error")
            }
        }
    }
}

impl From<FareError> for ApiError {
    fn from(err: FareError) -> Self {
        ApiError::new(Status::BadRequest, err.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(ErrorBody { error: self.message })).respond_to(request)
    }
}

/// `scheme://host` the client used to reach us, honouring a proxy's
/// `X-Forwarded-Proto`.
pub struct BaseUrl(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BaseUrl {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let headers = request.headers();
        let scheme = headers.get_one("X-Forwarded-Proto").unwrap_or("http");
        let host = headers.get_one("Host").unwrap_or("localhost");

        Outcome::Success(BaseUrl(format!("{}://{}", scheme, host)))
    }
}
