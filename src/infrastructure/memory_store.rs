//! 内存用户存储，用于脱离数据库的路由测试

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use crate::app::users::{NewUser, User, UserStore, UserUpdate};
use crate::core::error::StoreError;

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, User>,
}

/// id 从 1 开始单调递增，删除后不复用
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn create(&self, input: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let user = input.into_user(inner.last_id);
        inner.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn fetch(&self, id: i32) -> Result<User, StoreError> {
        let inner = self.inner.lock().await;
        inner.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: i32, changes: &UserUpdate) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().await;
        let user = inner.rows.get_mut(&id).ok_or(StoreError::NotFound)?;
        changes.apply_to(user);
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(first: &str, last: &str) -> NewUser {
        NewUser {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_and_not_reused() {
        let store = MemoryUserStore::new();
        let a = store.create(new_user("A", "B")).await.unwrap();
        let b = store.create(new_user("C", "D")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete(b.id).await.unwrap();
        let c = store.create(new_user("E", "F")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_not_found_paths() {
        let store = MemoryUserStore::new();
        assert!(matches!(store.fetch(1).await, Err(StoreError::NotFound)));
        assert!(matches!(store.delete(1).await, Err(StoreError::NotFound)));
        assert!(matches!(
            store.update(1, &UserUpdate::default()).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_partial_update() {
        let store = MemoryUserStore::new();
        let user = store.create(new_user("Grace", "Hopper")).await.unwrap();

        let changes = UserUpdate {
            email: Some("grace@navy.mil".to_string()),
            ..Default::default()
        };
        let updated = store.update(user.id, &changes).await.unwrap();
        assert_eq!(updated.first_name, "Grace");
        assert_eq!(updated.last_name, "Hopper");
        assert_eq!(updated.email.as_deref(), Some("grace@navy.mil"));
        assert_eq!(store.fetch(user.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let store = MemoryUserStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
