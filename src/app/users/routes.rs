//! 路由表：只按路径分发，方法校验在处理器内完成

use axum::{
    http::{Method, StatusCode},
    routing::any,
    Router,
};

use super::handler::{self, AppState};
use crate::core::error::ApiError;

/// 对外暴露的端点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListUsers,
    Create,
    GetUser,
    Update,
    UpdateEmail,
    Delete,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::ListUsers,
        Endpoint::Create,
        Endpoint::GetUser,
        Endpoint::Update,
        Endpoint::UpdateEmail,
        Endpoint::Delete,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ListUsers => "/getUsers",
            Endpoint::Create => "/create",
            Endpoint::GetUser => "/getUser",
            Endpoint::Update => "/update",
            Endpoint::UpdateEmail => "/updateEmail",
            Endpoint::Delete => "/delete",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::ListUsers | Endpoint::GetUser => Method::GET,
            Endpoint::Create => Method::POST,
            Endpoint::Update | Endpoint::UpdateEmail => Method::PATCH,
            Endpoint::Delete => Method::DELETE,
        }
    }

    /// 方法不匹配时的状态码：列表端点返回 405，其余返回 400
    pub fn method_rejection_status(self) -> StatusCode {
        match self {
            Endpoint::ListUsers => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// 以该端点不接受的方法访问时返回的错误
    pub fn reject(self, method: &Method) -> ApiError {
        ApiError::MethodNotAllowed {
            method: method.clone(),
            path: self.path(),
            status: self.method_rejection_status(),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Endpoint::ListUsers => "List users",
            Endpoint::Create => "Create user",
            Endpoint::GetUser => "Get user by ?id=",
            Endpoint::Update => "Update user fields by ?id=",
            Endpoint::UpdateEmail => "Update user fields by ?id= (alias)",
            Endpoint::Delete => "Delete user by ?id=",
        }
    }
}

// 创建路由
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route(Endpoint::ListUsers.path(), any(handler::list_users))
        .route(Endpoint::Create.path(), any(handler::create_user))
        .route(Endpoint::GetUser.path(), any(handler::get_user))
        .route(Endpoint::Update.path(), any(handler::update_user))
        .route(Endpoint::UpdateEmail.path(), any(handler::update_email))
        .route(Endpoint::Delete.path(), any(handler::delete_user))
        .fallback(handler::no_route)
}
