use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::user::{
  model::{CreateUserRequest, UpdateUserRequest, User},
  repository::SqlxUserRepository,
  service::{UserService, UserServiceError, UserServiceImpl},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn create_user(
    &self,
    req: CreateUserRequest,
  ) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn update_user(
    &self,
    user_id: i32,
    req: UpdateUserRequest,
  ) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn get_user(&self, user_id: i32) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<User>, UserServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub user_service: Arc<dyn UserService>,
}

impl SharedAppState {
  pub fn new(pool: PgPool) -> Self {
    let user_repository = SqlxUserRepository::new(pool);
    Self::from_service(Arc::new(UserServiceImpl::new(user_repository)))
  }

  pub fn from_service(user_service: Arc<dyn UserService>) -> Self {
    Self { user_service }
  }
}

impl AppState for SharedAppState {
  async fn create_user(&self, req: CreateUserRequest) -> Result<User, UserServiceError> {
    self.user_service.create_user(req).await
  }

  async fn update_user(&self, user_id: i32, req: UpdateUserRequest) -> Result<User, UserServiceError> {
    self.user_service.update_user(user_id, req).await
  }

  async fn get_user(&self, user_id: i32) -> Result<User, UserServiceError> {
    self.user_service.get_user_by_id(user_id).await
  }

  async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
    self.user_service.list_users().await
  }
}
