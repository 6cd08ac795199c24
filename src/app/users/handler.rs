//! 用户处理器

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, RawQuery, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{error, info};

use super::{
    model::{NewUser, User, UserUpdate},
    routes::Endpoint,
    store::UserStore,
};
use crate::core::{
    error::{ApiError, StoreError},
    response::ErrorBody,
};

const LIST_FAILED: &str = "We are experiencing difficulties at the moment...";
const CREATE_FAILED: &str = "Error occurred creating user";
const FETCH_FAILED: &str = "Error occurred fetching user";
const UPDATE_FAILED: &str = "Error occurred updating user";
const DELETE_FAILED: &str = "Error deleting user";

// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

/// 请求体，提取失败延后到方法校验之后再报告
type Body = Result<Bytes, BytesRejection>;

// 查询参数：只取第一个 `id`，其余参数忽略
#[derive(Debug)]
pub struct IdParam {
    id: Option<String>,
}

impl IdParam {
    fn from_query(query: Option<&str>) -> Self {
        let id = query.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "id")
                .map(|(_, value)| value.into_owned())
        });
        Self { id }
    }

    fn parse(&self) -> Result<i32, ApiError> {
        self.id
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .ok_or(ApiError::InvalidId)
    }
}

fn parse_id(query: &Option<String>) -> Result<i32, ApiError> {
    IdParam::from_query(query.as_deref()).parse()
}

fn ensure_method(endpoint: Endpoint, method: &Method) -> Result<(), ApiError> {
    if *method == endpoint.method() {
        Ok(())
    } else {
        Err(endpoint.reject(method))
    }
}

fn decode<T: DeserializeOwned>(body: Body) -> Result<T, ApiError> {
    let body = body.map_err(|e| ApiError::BadPayload(format!("Invalid request body: {}", e)))?;
    serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadPayload(format!("Invalid request body: {}", e)))
}

fn internal(err: StoreError, message: &'static str) -> ApiError {
    error!("Database error: {}", err);
    ApiError::Internal(message)
}

// 获取用户列表
pub async fn list_users(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<Vec<User>>, ApiError> {
    ensure_method(Endpoint::ListUsers, &method)?;

    let users = state
        .store
        .list_all()
        .await
        .map_err(|e| internal(e, LIST_FAILED))?;

    Ok(Json(users))
}

// 创建用户
pub async fn create_user(
    State(state): State<AppState>,
    method: Method,
    body: Body,
) -> Result<Json<User>, ApiError> {
    ensure_method(Endpoint::Create, &method)?;

    let input: NewUser = decode(body)?;
    let user = state
        .store
        .create(input)
        .await
        .map_err(|e| internal(e, CREATE_FAILED))?;

    info!("Created user: {} {} ({})", user.first_name, user.last_name, user.id);

    Ok(Json(user))
}

// 根据 ID 获取用户；不存在时返回 200 和错误结构体
pub async fn get_user(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    ensure_method(Endpoint::GetUser, &method)?;
    let id = parse_id(&query)?;

    match state.store.fetch(id).await {
        Ok(user) => Ok(Json(user).into_response()),
        Err(StoreError::NotFound) => Ok((
            StatusCode::OK,
            ErrorBody::new(format!("No user with ID {}", id)),
        )
            .into_response()),
        Err(e) => Err(internal(e, FETCH_FAILED)),
    }
}

// 更新用户
pub async fn update_user(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Body,
) -> Result<Json<User>, ApiError> {
    apply_update(Endpoint::Update, &state, &method, &query, body).await
}

// 历史端点，与 /update 行为一致
pub async fn update_email(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Body,
) -> Result<Json<User>, ApiError> {
    apply_update(Endpoint::UpdateEmail, &state, &method, &query, body).await
}

async fn apply_update(
    endpoint: Endpoint,
    state: &AppState,
    method: &Method,
    query: &Option<String>,
    body: Body,
) -> Result<Json<User>, ApiError> {
    ensure_method(endpoint, method)?;
    let id = parse_id(query)?;

    let changes: UserUpdate = decode(body)?;
    if changes.is_empty() {
        return Err(ApiError::BadPayload("No fields to update".to_string()));
    }

    match state.store.update(id, &changes).await {
        Ok(user) => {
            info!("Updated user: {}", user.id);
            Ok(Json(user))
        }
        Err(StoreError::NotFound) => Err(ApiError::NotFound(format!("No user with ID {}", id))),
        Err(e) => Err(internal(e, UPDATE_FAILED)),
    }
}

// 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<StatusCode, ApiError> {
    ensure_method(Endpoint::Delete, &method)?;
    let id = parse_id(&query)?;

    match state.store.delete(id).await {
        Ok(()) => {
            info!("Deleted user: {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(StoreError::NotFound) => Err(ApiError::NotFound(format!("No user with id {}", id))),
        Err(e) => Err(internal(e, DELETE_FAILED)),
    }
}

pub async fn no_route(uri: Uri) -> (StatusCode, ErrorBody) {
    (
        StatusCode::NOT_FOUND,
        ErrorBody::new(format!("No route for {}", uri.path())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(raw: Option<&str>) -> IdParam {
        IdParam {
            id: raw.map(str::to_string),
        }
    }

    #[test]
    fn test_id_param_parsing() {
        assert_eq!(param(Some("42")).parse().unwrap(), 42);
        assert_eq!(param(Some("-3")).parse().unwrap(), -3);
        assert!(matches!(param(Some("abc")).parse(), Err(ApiError::InvalidId)));
        assert!(matches!(param(Some("")).parse(), Err(ApiError::InvalidId)));
        assert!(matches!(param(None).parse(), Err(ApiError::InvalidId)));
    }

    #[test]
    fn test_first_id_wins() {
        let first = |raw: &str| IdParam::from_query(Some(raw)).parse().ok();
        assert_eq!(first("id=1&id=2"), Some(1));
        assert_eq!(first("name=x&id=7"), Some(7));
        assert_eq!(first("id=%2D5"), Some(-5));
        assert_eq!(first("id=x&id=2"), None);
        assert!(IdParam::from_query(None).parse().is_err());
    }

    #[test]
    fn test_ensure_method() {
        assert!(ensure_method(Endpoint::Delete, &Method::DELETE).is_ok());
        let err = ensure_method(Endpoint::Update, &Method::POST).unwrap_err();
        assert_eq!(err.message(), "Method POST not allowed for endpoint /update");
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let body = Ok(Bytes::from_static(b"{not json"));
        let err = decode::<NewUser>(body).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
