use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::model::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn create(&self, name: &str, email: &str, timestamp: DateTime<Utc>) -> Result<User, sqlx::Error>;
  async fn update(&self, id: i32, name: &str, email: &str, updated_at: DateTime<Utc>) -> Result<u64, sqlx::Error>;
  async fn find_by_id(&self, id: i32) -> Result<Option<User>, sqlx::Error>;
  async fn find_all(&self) -> Result<Vec<User>, sqlx::Error>;
}

pub struct SqlxUserRepository {
  pub pool: PgPool,
}

impl SqlxUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
  async fn create(&self, name: &str, email: &str, timestamp: DateTime<Utc>) -> Result<User, sqlx::Error> {
    User::create(&self.pool, name, email, timestamp).await
  }

  async fn update(&self, id: i32, name: &str, email: &str, updated_at: DateTime<Utc>) -> Result<u64, sqlx::Error> {
    User::update_with_executor(&self.pool, id, name, email, updated_at).await
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<User>, sqlx::Error> {
    User::find_by_id(&self.pool, id).await
  }

  async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
    User::find_all(&self.pool).await
  }
}
