//! # customer-api
//!
//! 基于 Axum + SQLx 的 customer 表增删改查服务：
//! - app: 处理器、路由与数据模型
//! - core: 错误、响应与中间件
//! - infrastructure: 数据库连接、存储实现与日志
//! - config: 环境变量配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{create_app, AppState};
pub use config::{Config, ConfigError, DatabaseConfig};
pub use crate::core::error::{ApiError, StoreError};
