use serde::{Deserialize, Serialize};

/// Query string of `GET /api/executionplan`
///
/// Both values arrive as raw strings so that a missing or malformed
/// parameter is reported with the service's own error body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlanQuery {
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(default)]
    pub order_amount: Option<String>,
}

/// Ping response
#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        ErrorResponse {
            code,
            msg: msg.into(),
        }
    }
}
