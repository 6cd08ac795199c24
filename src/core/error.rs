//! 核心错误处理模块

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::response::ErrorBody;

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 主键查询或变更没有命中任何行
    #[error("no rows matched")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// 处理器边界上的错误，统一转换为 `{"Err": ...}` 响应
#[derive(Debug)]
pub enum ApiError {
    /// 方法不匹配，状态码由端点决定
    MethodNotAllowed {
        method: Method,
        path: &'static str,
        status: StatusCode,
    },
    InvalidId,
    BadPayload(String),
    NotFound(String),
    /// 对外只暴露固定文案，底层错误在转换前记录日志
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed { status, .. } => *status,
            ApiError::InvalidId | ApiError::BadPayload(_) | ApiError::NotFound(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::MethodNotAllowed { method, path, .. } => {
                format!("Method {} not allowed for endpoint {}", method, path)
            }
            ApiError::InvalidId => "Please ensure you are passing in a valid ID".to_string(),
            ApiError::BadPayload(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Internal(msg) => (*msg).to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), ErrorBody::new(self.message())).into_response()
    }
}
