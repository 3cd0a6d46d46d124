pub mod config;
pub mod locations;
pub mod login;
pub mod timesheets;

use anyhow::{Context, Result};
use humanity_client::{ApiResponse, ClientError, HumanityClient};
use std::io::{self, Write};

/// Ensure the client holds a token, logging in when none was supplied.
pub async fn ensure_session(client: &mut HumanityClient) -> Result<()> {
    if client.session().is_authenticated() {
        tracing::debug!("Using supplied token");
        return Ok(());
    }

    tracing::info!("No token supplied, logging in as {}", client.credentials().username);
    client
        .authenticate()
        .await
        .map_err(describe)
        .context("Login failed")?;
    Ok(())
}

/// Attach the rejected response body to the error so the user can see why.
pub fn describe(err: ClientError) -> anyhow::Error {
    match err.response() {
        Some(response) => {
            let body = response.data.to_string();
            anyhow::Error::new(err).context(format!("Response body: {}", body))
        }
        None => anyhow::Error::new(err),
    }
}

pub fn write_response(response: &ApiResponse) -> Result<()> {
    let json = serde_json::to_string_pretty(&response.data)
        .context("Failed to serialize response")?;

    let mut stdout = io::stdout();
    stdout.write_all(json.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
