use axum::{
  http::{header, HeaderValue, Method},
  response::Json as JsonResponse,
  routing::get,
  Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{domains::user::rest::user_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(health_handler))
    .nest("/api/go", user_routes())
    .with_state(state)
}

pub async fn health_handler() -> JsonResponse<Value> {
  JsonResponse(json!({ "status": "ok" }))
}

/// `*` anywhere in `origins` allows every origin. Entries that are not valid
/// header values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let layer = CorsLayer::new()
    .allow_methods([Method::GET, Method::POST, Method::PUT])
    .allow_headers([header::CONTENT_TYPE]);

  if origins.iter().any(|origin| origin == "*") {
    return layer.allow_origin(Any);
  }

  let origins: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|origin| match origin.parse::<HeaderValue>() {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
        None
      }
    })
    .collect();

  layer.allow_origin(AllowOrigin::list(origins))
}
