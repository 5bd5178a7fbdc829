use growguru_client::prelude::*;
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let path = std::env::args().nth(1).unwrap_or_else(|| "/users/me".to_string());
    let config = Config::new();
    info!("Configuration: {}", config);

    let client = HttpClient::from_config(&config)?;
    let value: Value = client.get(&path).await?;
    info!("{} -> {}", path, serde_json::to_string_pretty(&value)?);
    Ok(())
}
