use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use coin_tracker::network::API_URL_ENV;
use coin_tracker::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Coin price history and windowed percent change")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a coin's price history and print the change card
    Price {
        /// Coin identifier, e.g. btc-bitcoin
        coin_id: String,

        /// Lookback window in minutes
        #[arg(long, default_value_t = 30)]
        window_minutes: u32,

        /// History endpoint base URL
        #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
    /// Print a display palette as JSON
    Theme {
        /// dark or light
        #[arg(default_value = "dark")]
        mode: ThemeMode,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Price {
            coin_id,
            window_minutes,
            api_url,
            timeout_secs,
        } => {
            let window = ChangeWindow::from_minutes(window_minutes);
            let client = TrackerClient::builder()
                .base_url(&api_url)
                .timeout(Duration::from_secs(timeout_secs))
                .change_window(window)
                .build()?;

            let mut query = PriceQuery::new(CoinId::from(coin_id));
            tracing::info!(key = %query.key(), url = client.base_url(), "Fetching price history");
            let state = query.run(&client).await;

            println!("{}", PriceCard::from_state(state, window, chrono::Utc::now()));
            if let Some(err) = state.error() {
                return Err(anyhow!("{err}"));
            }
        }
        Command::Theme { mode } => {
            println!("{}", serde_json::to_string_pretty(mode.theme())?);
        }
    }

    Ok(())
}
