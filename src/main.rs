use tokio::signal;
use tracing_subscriber::EnvFilter;

use user_card_api::app::{cors_layer, create_app};
use user_card_api::config::AppConfig;
use user_card_api::db::pool::{create_pool, run_migrations};
use user_card_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = AppConfig::from_env()?;

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let pool = create_pool(&config).await?;
  run_migrations(&pool).await?;

  let app_state = SharedAppState::new(pool.clone());
  let app = create_app(app_state).layer(cors_layer(&config.cors_origins));

  let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

  tracing::info!("Server running on http://{}", config.bind_address());

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  pool.close().await;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
