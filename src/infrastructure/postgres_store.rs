//! 基于 PostgreSQL 的用户存储，所有语句均使用绑定参数

use async_trait::async_trait;
use sqlx::{postgres::PgPool, Postgres, QueryBuilder};

use crate::app::users::{NewUser, User, UserStore, UserUpdate};
use crate::core::error::StoreError;

const SELECT_USERS: &str = "SELECT id, first_name, last_name, email FROM customer";

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create(&self, input: NewUser) -> Result<User, StoreError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO customer (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(input.into_user(id))
    }

    async fn fetch(&self, id: i32) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(&format!("{} WHERE id = $1", SELECT_USERS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: i32, changes: &UserUpdate) -> Result<User, StoreError> {
        if changes.is_empty() {
            return self.fetch(id).await;
        }

        // 构建动态更新语句，只包含请求中出现的字段
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE customer SET ");
        {
            let mut assignments = builder.separated(", ");
            if let Some(first_name) = &changes.first_name {
                assignments.push("first_name = ");
                assignments.push_bind_unseparated(first_name.clone());
            }
            if let Some(last_name) = &changes.last_name {
                assignments.push("last_name = ");
                assignments.push_bind_unseparated(last_name.clone());
            }
            if let Some(email) = &changes.email {
                assignments.push("email = ");
                assignments.push_bind_unseparated(email.clone());
            }
        }
        builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" RETURNING id, first_name, last_name, email");

        builder
            .build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
