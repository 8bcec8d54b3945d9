use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::user::{model::User, repository::UserRepository, service::UserServiceImpl},
  state::SharedAppState,
};

/// `users` table stand-in that assigns ids the way a serial column does.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
  rows: Arc<Mutex<Vec<User>>>,
  fail_writes: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
  pub fn rows(&self) -> Vec<User> {
    self.rows.lock().expect("rows lock").clone()
  }

  pub fn fail_writes(&self) {
    self.fail_writes.store(true, Ordering::SeqCst);
  }

  fn check_writable(&self) -> Result<(), sqlx::Error> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(sqlx::Error::PoolClosed);
    }
    Ok(())
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, name: &str, email: &str, timestamp: DateTime<Utc>) -> Result<User, sqlx::Error> {
    self.check_writable()?;
    let mut rows = self.rows.lock().expect("rows lock");
    let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
    let user = User {
      id,
      name: name.to_string(),
      email: email.to_string(),
      created_at: timestamp,
      updated_at: timestamp,
    };
    rows.push(user.clone());
    Ok(user)
  }

  async fn update(&self, id: i32, name: &str, email: &str, updated_at: DateTime<Utc>) -> Result<u64, sqlx::Error> {
    self.check_writable()?;
    let mut rows = self.rows.lock().expect("rows lock");
    let mut affected = 0;
    for row in rows.iter_mut().filter(|u| u.id == id) {
      row.name = name.to_string();
      row.email = email.to_string();
      row.updated_at = updated_at;
      affected += 1;
    }
    Ok(affected)
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<User>, sqlx::Error> {
    Ok(self.rows.lock().expect("rows lock").iter().find(|u| u.id == id).cloned())
  }

  async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
    Ok(self.rows())
  }
}

pub fn app_in_memory() -> (Router, InMemoryUserRepository) {
  let repo = InMemoryUserRepository::default();
  let state = SharedAppState::from_service(Arc::new(UserServiceImpl::new(repo.clone())));
  (create_app(state), repo)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_string(body).expect("serialize request body");
  send_raw(app, "POST", uri, &body).await
}

pub async fn put_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_string(body).expect("serialize request body");
  send_raw(app, "PUT", uri, &body).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");
  oneshot(app, request).await
}

pub async fn send_raw(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(body.to_string()))
    .expect("build request");
  oneshot(app, request).await
}

async fn oneshot(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
