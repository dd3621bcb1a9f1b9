use std::error::Error;

use country_server::{Config, Upstream};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("country_server=info,tower_http=debug")),
        )
        .init();

    let config = Config::load()?;
    let upstream = Upstream::new(config.upstream_url.clone(), &config.upstream_fields)?;
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    country_server::run(listener, upstream).await?;
    Ok(())
}
