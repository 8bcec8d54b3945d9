use axum::{
  extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path, State,
  },
  response::{Html, Json as JsonResponse},
  routing::get,
  Router,
};

use super::{
  card::{UserCard, UserRecordView},
  model::{CreateUserRequest, UpdateUserRequest, User},
};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn user_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/users", get(list_users_handler).post(create_user_handler))
    .route("/users/{user_id}", get(get_user_handler).put(update_user_handler))
    .route("/users/{user_id}/card", get(get_user_card_handler))
}

pub async fn create_user_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<JsonResponse<User>, AppError> {
  let Json(payload) = payload?;

  state.create_user(payload).await.map(JsonResponse).map_err(Into::into)
}

pub async fn update_user_handler(
  State(state): State<SharedAppState>,
  user_id: Result<Path<i32>, PathRejection>,
  payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<JsonResponse<User>, AppError> {
  let Path(user_id) = user_id?;
  let Json(payload) = payload?;

  state
    .update_user(user_id, payload)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn get_user_handler(
  State(state): State<SharedAppState>,
  user_id: Result<Path<i32>, PathRejection>,
) -> Result<JsonResponse<User>, AppError> {
  let Path(user_id) = user_id?;

  state.get_user(user_id).await.map(JsonResponse).map_err(Into::into)
}

pub async fn list_users_handler(State(state): State<SharedAppState>) -> Result<JsonResponse<Vec<User>>, AppError> {
  state.list_users().await.map(JsonResponse).map_err(Into::into)
}

pub async fn get_user_card_handler(
  State(state): State<SharedAppState>,
  user_id: Result<Path<i32>, PathRejection>,
) -> Result<Html<String>, AppError> {
  let Path(user_id) = user_id?;
  let user = state.get_user(user_id).await?;

  let record = UserRecordView::from(&user);
  Ok(Html(UserCard::from_record(&record).to_html()))
}
