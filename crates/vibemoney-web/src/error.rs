use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use vibemoney_schema::ValidationError;
use vibemoney_service::ProviderError;

/// Every failure a handler can return; rendered as `[ErrorBody]`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Wire input that could not be extracted (missing field, non-integer limit, ...)
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// JSON error response body
///
/// ```json
/// {
///     "status": 422,
///     "error": "validation_error",
///     "message": "limit must be between 1 and 100, got 0"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Validation(_) => "validation_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::Provider(ProviderError::Unsupported(_)) => "bad_request",
            ApiError::Provider(_) => "upstream_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Provider(ProviderError::Unsupported(_)) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Provider(e) = self {
            warn!("provider failure: {e}");
        }

        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            status: status.as_u16(),
            error: self.code().to_string(),
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_unprocessable() {
        let err = ApiError::from(ValidationError::EmptySymbol);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "validation_error");
        assert_eq!(err.to_string(), "symbol cannot be empty");
    }

    #[test]
    fn provider_errors_map_to_gateway_or_bad_request() {
        let down = ApiError::from(ProviderError::Upstream {
            provider: "polygon",
            message: "HTTP 500".into(),
        });
        assert_eq!(down.status_code(), StatusCode::BAD_GATEWAY);

        let unsupported = ApiError::from(ProviderError::Unsupported("only 1d".into()));
        assert_eq!(unsupported.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(unsupported.code(), "bad_request");
    }
}
