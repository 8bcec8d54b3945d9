use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub host: String,
  pub port: u16,
  pub database_url: String,
  pub max_connections: u32,
  pub cors_origins: Vec<String>,
}

impl AppConfig {
  pub fn from_env() -> anyhow::Result<Self> {
    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port = env::var("PORT")
      .unwrap_or_else(|_| "8000".into())
      .parse()
      .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
    let database_url = env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
      .unwrap_or_else(|_| "10".into())
      .parse()
      .map_err(|e| anyhow::anyhow!("invalid DATABASE_MAX_CONNECTIONS: {}", e))?;
    let cors_origins = parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

    Ok(Self {
      host,
      port,
      database_url,
      max_connections,
      cors_origins,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

/// An empty or blank list falls back to `*`.
fn parse_origins(raw: &str) -> Vec<String> {
  let origins: Vec<String> = raw
    .split(',')
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .collect();

  if origins.is_empty() {
    return vec!["*".to_string()];
  }
  origins
}
