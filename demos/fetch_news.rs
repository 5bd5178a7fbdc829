use growguru_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let ticker = std::env::args().nth(1).unwrap_or_else(|| "PETR4".to_string());
    let config = Config::new();
    let news = NewsClient::new(&config)?;

    match news.fetch_news(&ticker).await {
        Ok(payload) => {
            info!("News for {}: {}", ticker, serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        Err(e) => {
            if let Some(status) = e.status() {
                error!("News service answered {}", status);
            }
            Err(e.into())
        }
    }
}
