use anyhow::{Context, Result};
use humanity_client::HumanityClient;

use super::{describe, ensure_session, write_response};

pub async fn execute(client: &mut HumanityClient) -> Result<()> {
    ensure_session(client).await?;

    tracing::info!("Fetching account configuration");
    let response = client
        .get_config()
        .await
        .map_err(describe)
        .context("Failed to fetch configuration")?;

    write_response(&response)
}
