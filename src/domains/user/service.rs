use async_trait::async_trait;
use std::error::Error;
use validator::Validate;

use super::{
  model::{CreateUserRequest, UpdateUserRequest, User},
  repository::UserRepository,
};
use crate::{impl_service_error_conversions, utils::current_timestamp};

#[derive(Debug)]
pub enum UserServiceError {
  ValidationError(String),
  InternalServerError(String),
  UserNotFound(String),
}

impl Error for UserServiceError {}

impl std::fmt::Display for UserServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UserServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      UserServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
      UserServiceError::UserNotFound(msg) => write!(f, "User Not Found: {}", msg),
    }
  }
}

impl_service_error_conversions!(UserServiceError, InternalServerError);

#[async_trait]
pub trait UserService: Send + Sync {
  async fn create_user(&self, req: CreateUserRequest) -> Result<User, UserServiceError>;
  async fn update_user(&self, user_id: i32, req: UpdateUserRequest) -> Result<User, UserServiceError>;
  async fn get_user_by_id(&self, user_id: i32) -> Result<User, UserServiceError>;
  async fn list_users(&self) -> Result<Vec<User>, UserServiceError>;
}

pub struct UserServiceImpl<U> {
  user_repository: U,
}

impl<U> UserServiceImpl<U>
where
  U: UserRepository,
{
  pub fn new(user_repository: U) -> Self {
    Self { user_repository }
  }
}

fn user_not_found(user_id: i32) -> UserServiceError {
  UserServiceError::UserNotFound(format!("User {} not found", user_id))
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
  U: UserRepository,
{
  async fn create_user(&self, req: CreateUserRequest) -> Result<User, UserServiceError> {
    req
      .validate()
      .map_err(|e| UserServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let now = current_timestamp();

    let user = self
      .user_repository
      .create(&req.name, &req.email, now)
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Failed to create user: {}", e)))?;

    tracing::info!(user_id = user.id, "user created");

    Ok(user)
  }

  async fn update_user(&self, user_id: i32, req: UpdateUserRequest) -> Result<User, UserServiceError> {
    req
      .validate()
      .map_err(|e| UserServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let now = current_timestamp();

    let rows_affected = self
      .user_repository
      .update(user_id, &req.name, &req.email, now)
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Failed to update user: {}", e)))?;

    tracing::debug!(user_id, rows_affected, "user update executed");

    // The response is the persisted row, never the request body.
    let user = self
      .user_repository
      .find_by_id(user_id)
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Failed to reload user: {}", e)))?
      .ok_or_else(|| user_not_found(user_id))?;

    tracing::info!(user_id = user.id, "user updated");

    Ok(user)
  }

  async fn get_user_by_id(&self, user_id: i32) -> Result<User, UserServiceError> {
    let user = self
      .user_repository
      .find_by_id(user_id)
      .await?
      .ok_or_else(|| user_not_found(user_id))?;

    Ok(user)
  }

  async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
    let users = self.user_repository.find_all().await?;
    Ok(users)
  }
}
