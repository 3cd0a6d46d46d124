use anyhow::{Context, Result};
use humanity_client::HumanityClient;

use super::{describe, ensure_session, write_response};

pub async fn execute(client: &mut HumanityClient, location_type: Option<&str>) -> Result<()> {
    ensure_session(client).await?;

    tracing::info!("Fetching locations (type: {})", location_type.unwrap_or("any"));
    let response = client
        .get_locations(location_type)
        .await
        .map_err(describe)
        .context("Failed to fetch locations")?;

    write_response(&response)
}
