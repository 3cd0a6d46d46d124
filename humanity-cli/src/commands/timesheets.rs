use anyhow::{Context, Result};
use humanity_client::HumanityClient;

use super::{describe, ensure_session, write_response};

pub async fn execute(client: &mut HumanityClient, start_date: &str, end_date: &str) -> Result<()> {
    ensure_session(client).await?;

    tracing::info!("Fetching timesheets from {} to {}", start_date, end_date);
    let response = client
        .get_timesheets(start_date, end_date)
        .await
        .map_err(describe)
        .context("Failed to fetch timesheets")?;

    write_response(&response)
}
