use biometrics_store::{connect, store_summary, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "biometrics_store=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = StoreConfig::from_env()?;
  let pool = connect(&config).await?;

  let summary = store_summary(&pool).await?;
  println!("{}", serde_json::to_string_pretty(&summary)?);

  pool.close().await;
  Ok(())
}
