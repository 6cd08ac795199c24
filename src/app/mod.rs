//! 应用层

pub mod users;

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
pub use users::handler::AppState;

/// 组装完整应用：用户路由 + 追踪与请求日志中间件
pub fn create_app(state: AppState) -> Router {
    users::routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
