use axum::{
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::user::service::UserServiceError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error occurred";

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
  }
}

impl From<PathRejection> for AppError {
  fn from(rejection: PathRejection) -> Self {
    tracing::debug!("Rejected path parameter: {}", rejection.body_text());
    AppError::bad_request(format!("Invalid path parameter: {}", rejection.body_text()))
  }
}

impl From<UserServiceError> for AppError {
  fn from(error: UserServiceError) -> Self {
    match error {
      UserServiceError::ValidationError(msg) => AppError::bad_request(msg),
      UserServiceError::UserNotFound(msg) => AppError::not_found(msg),
      UserServiceError::InternalServerError(msg) => {
        tracing::error!("{}", msg);
        AppError::internal_server_error(INTERNAL_ERROR_MESSAGE)
      }
    }
  }
}
