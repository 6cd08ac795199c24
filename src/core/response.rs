//! 核心响应处理模块

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// 错误响应结构，字段名固定为 `Err`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "Err")]
    pub err: String,
}

impl ErrorBody {
    pub fn new(err: impl Into<String>) -> Self {
        Self { err: err.into() }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorBody::new("No user with ID 7")).unwrap();
        assert_eq!(body, serde_json::json!({ "Err": "No user with ID 7" }));
    }
}
