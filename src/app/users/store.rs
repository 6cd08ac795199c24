//! 用户存储抽象

use async_trait::async_trait;

use super::model::{NewUser, User, UserUpdate};
use crate::core::error::StoreError;

/// 记录存储：每个操作对应一条自动提交的语句，可被多个请求并发调用
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 返回全部记录，顺序不作保证；空表返回空列表
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    /// 插入记录并返回带有新 id 的完整记录
    async fn create(&self, input: NewUser) -> Result<User, StoreError>;

    async fn fetch(&self, id: i32) -> Result<User, StoreError>;

    /// 只更新 `changes` 中出现的字段，返回更新后的记录
    async fn update(&self, id: i32, changes: &UserUpdate) -> Result<User, StoreError>;

    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}
