//! HTTP mapping for application errors

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::error::Error;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingField(_)
            | Error::EmptySelection
            | Error::InvalidMood(_)
            | Error::UnsupportedFile(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_validation() {
            tracing::debug!("request rejected: {}", self);
        } else if let Error::Io(e) = self {
            tracing::error!("request failed: {}", e);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
