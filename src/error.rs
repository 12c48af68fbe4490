use aide::OperationOutput;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use tracing::debug;

/// A terminal per-request failure, rendered as a plain-text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed input or a duplicate id on creation.
    BadRequest(&'static str),
    /// Missing id, or an id whose name does not match the filter.
    NotFound(&'static str),
}

impl ApiError {
    pub const INVALID_JSON: Self = Self::BadRequest("Invalid JSON.");
    pub const ID_EXISTS: Self = Self::BadRequest("Item ID already exists.");
    pub const ID_NOT_FOUND: Self = Self::NotFound("Item ID not found.");
    pub const NAME_NOT_FOUND: Self = Self::NotFound("Item name not found.");
    pub const ID_DOES_NOT_EXIST: Self = Self::NotFound("Item ID does not exist.");
    pub const NO_ROUTE: Self = Self::NotFound("Not Found.");

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status(), message = self.message(), "request rejected");
        (self.status(), self.message()).into_response()
    }
}

// Error responses are documented per operation in `handlers`.
impl OperationOutput for ApiError {
    type Inner = Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        assert_eq!(ApiError::INVALID_JSON.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::ID_EXISTS.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ApiError::ID_NOT_FOUND.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NAME_NOT_FOUND.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::ID_DOES_NOT_EXIST.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn display_is_the_plain_message() {
        assert_eq!(ApiError::ID_EXISTS.to_string(), "Item ID already exists.");
        assert_eq!(format!("{}", ApiError::NO_ROUTE), "Not Found.");
    }

    #[test]
    fn response_carries_status_and_text_body() {
        let response = ApiError::ID_NOT_FOUND.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/plain"));
    }
}
