//! End-to-end run: authenticate a user from environment variables and write
//! their aggregated data to `./bridge-api-results.json`.
//!
//! Required environment: `BRIDGE_API_CLIENT_ID`, `BRIDGE_API_CLIENT_SECRET`,
//! `BRIDGE_API_VERSION`, `EMAIL`, `PASSWORD`. Optional:
//! `BRIDGE_API_BASE_URL` (defaults to production) and `OUTPUT_PATH`.

use bridge_rs::{BridgeClient, snapshot};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client_id = std::env::var("BRIDGE_API_CLIENT_ID")?;
    let client_secret = std::env::var("BRIDGE_API_CLIENT_SECRET")?;
    let bridge_version = std::env::var("BRIDGE_API_VERSION")?;
    let email = std::env::var("EMAIL")?;
    let password = std::env::var("PASSWORD")?;
    let output_path =
        std::env::var("OUTPUT_PATH").unwrap_or_else(|_| "./bridge-api-results.json".into());

    let mut builder = BridgeClient::builder()
        .client_id(client_id)
        .client_secret(client_secret)
        .bridge_version(bridge_version);
    if let Ok(base_url) = std::env::var("BRIDGE_API_BASE_URL") {
        builder = builder.base_url(Url::parse(&base_url)?);
    }
    let client = builder.build()?;

    snapshot::export_user_data(&client, &email, &password, &output_path).await?;
    println!("exported user data to {output_path}");

    Ok(())
}
