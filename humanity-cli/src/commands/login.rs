use anyhow::{Context, Result};
use humanity_client::HumanityClient;
use std::io::{self, Write};

use super::describe;

/// Log in and print the issued token so it can be reused via `--token`.
pub async fn execute(client: &mut HumanityClient) -> Result<()> {
    client
        .authenticate()
        .await
        .map_err(describe)
        .context("Login failed")?;

    let token = client.session().wire_token();
    writeln!(io::stdout(), "{}", token)?;

    tracing::info!("Login successful");
    Ok(())
}
