use crate::application::ExecutionPlanError;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(code: i32, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            code: -1000,
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        ApiError {
            code: -1001,
            message: message.into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn insufficient_liquidity(message: impl Into<String>) -> Self {
        ApiError {
            code: -2010,
            message: message.into(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn missing_parameter(param: &str) -> Self {
        Self::bad_request(
            -1102,
            format!("Mandatory parameter '{}' was not sent", param),
        )
    }

    pub fn invalid_parameter(param: &str, reason: &str) -> Self {
        Self::bad_request(-1100, format!("Illegal parameter '{}': {}", param, reason))
    }
}

impl From<ExecutionPlanError> for ApiError {
    fn from(err: ExecutionPlanError) -> Self {
        match err {
            ExecutionPlanError::Validation(msg) => Self::bad_request(-1100, msg),
            ExecutionPlanError::InsufficientLiquidity(e) => {
                Self::insufficient_liquidity(e.to_string())
            }
            ExecutionPlanError::NoData => Self::unavailable("No exchange data available"),
            ExecutionPlanError::Repository(e) => Self::internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.code, self.message));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
