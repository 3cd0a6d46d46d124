use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use humanity_client::{ClientConfig, Credentials, HumanityClient};

mod commands;

#[derive(Parser)]
#[command(name = "humanity")]
#[command(about = "Command-line client for the Humanity scheduling API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Humanity API key
    #[arg(long, env = "HUMANITY_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Staff username
    #[arg(long, env = "HUMANITY_USERNAME")]
    username: String,

    /// Staff password
    #[arg(long, env = "HUMANITY_PASSWORD", hide_env_values = true)]
    password: String,

    /// Access token from a previous login (skips logging in)
    #[arg(long, env = "HUMANITY_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API endpoint
    #[arg(long, env = "HUMANITY_BASE_URL", default_value = humanity_client::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Logging level
    #[arg(long, env = "HUMANITY_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the account configuration
    Config,

    /// List locations
    Locations {
        /// Location type to filter by
        #[arg(short, long = "type")]
        location_type: Option<String>,
    },

    /// Show a timesheet summary for a date range
    Timesheets {
        /// Start date, e.g. "Jan 05, 2023"
        #[arg(short, long)]
        start_date: String,

        /// End date, e.g. "Feb 01, 2023"
        #[arg(short, long)]
        end_date: String,
    },

    /// Log in and print the access token
    Login,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::fmt()
        .with_env_filter(&cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Humanity CLI starting");

    let credentials = Credentials::new(cli.api_key, cli.username, cli.password);
    let config = ClientConfig::with_base_url(&cli.base_url)
        .context("Invalid base URL")?;
    let mut client = HumanityClient::with_config(credentials, config)
        .context("Failed to create Humanity client")?;

    if let Some(token) = cli.token {
        client.set_token(token);
    }

    match cli.command {
        Commands::Config => {
            commands::config::execute(&mut client).await?;
        }
        Commands::Locations { location_type } => {
            commands::locations::execute(&mut client, location_type.as_deref()).await?;
        }
        Commands::Timesheets { start_date, end_date } => {
            commands::timesheets::execute(&mut client, &start_date, &end_date).await?;
        }
        Commands::Login => {
            commands::login::execute(&mut client).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_timesheets() {
        let cli = Cli::try_parse_from([
            "humanity",
            "--api-key", "key-1",
            "--username", "alice",
            "--password", "hunter2",
            "timesheets",
            "--start-date", "Jan 05, 2023",
            "--end-date", "Feb 01, 2023",
        ])
        .unwrap();

        match cli.command {
            Commands::Timesheets { start_date, end_date } => {
                assert_eq!(start_date, "Jan 05, 2023");
                assert_eq!(end_date, "Feb 01, 2023");
            }
            _ => panic!("expected timesheets command"),
        }
    }

    #[test]
    fn test_parse_locations_type() {
        let cli = Cli::try_parse_from([
            "humanity",
            "--api-key", "key-1",
            "--username", "alice",
            "--password", "hunter2",
            "locations",
            "--type", "1",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Locations { location_type: Some(ref t) } if t == "1"
        ));
    }
}
