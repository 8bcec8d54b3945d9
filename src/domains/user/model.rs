use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor, PgPool};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize, Serialize)]
pub struct User {
  pub id: i32,
  pub name: String,
  pub email: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateUserRequest {
  #[validate(length(min = 1, message = "name is required"))]
  pub name: String,
  #[validate(length(min = 1, message = "email is required"))]
  pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct UpdateUserRequest {
  #[validate(length(min = 1, message = "name is required"))]
  pub name: String,
  #[validate(length(min = 1, message = "email is required"))]
  pub email: String,
}

impl User {
  pub async fn create(db: &PgPool, name: &str, email: &str, timestamp: DateTime<Utc>) -> Result<User, sqlx::Error> {
    Self::create_with_executor(db, name, email, timestamp).await
  }

  /// Inserts a row with `created_at` and `updated_at` both set to `timestamp`.
  pub async fn create_with_executor<'e, E>(
    executor: E,
    name: &str,
    email: &str,
    timestamp: DateTime<Utc>,
  ) -> Result<User, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let user = sqlx::query_as::<_, User>(
      r#"
        INSERT INTO users (name, email, created_at, updated_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, created_at, updated_at
      "#,
    )
    .bind(name)
    .bind(email)
    .bind(timestamp)
    .bind(timestamp)
    .fetch_one(executor)
    .await?;

    Ok(user)
  }

  /// Rewrites `name`, `email` and `updated_at` for `id`. `created_at` is left
  /// untouched. Returns the number of rows affected, which is zero for an
  /// unknown id.
  pub async fn update_with_executor<'e, E>(
    executor: E,
    id: i32,
    name: &str,
    email: &str,
    updated_at: DateTime<Utc>,
  ) -> Result<u64, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let result = sqlx::query(r#"UPDATE users SET name = $1, email = $2, updated_at = $3 WHERE id = $4"#)
      .bind(name)
      .bind(email)
      .bind(updated_at)
      .bind(id)
      .execute(executor)
      .await?;

    Ok(result.rows_affected())
  }

  pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let user =
      sqlx::query_as::<_, User>(r#"SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1"#)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(user)
  }

  pub async fn find_all<'e, E>(executor: E) -> Result<Vec<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let users = sqlx::query_as::<_, User>(r#"SELECT id, name, email, created_at, updated_at FROM users ORDER BY id"#)
      .fetch_all(executor)
      .await?;

    Ok(users)
  }
}
