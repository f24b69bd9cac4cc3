use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use imdb_picker_core::{
    ClientConfig, ImdbClient, ImdbScraper, MalformedRowPolicy, Picker, TopChartExtractor,
    DEFAULT_CHART_URL, DEFAULT_USER_AGENT,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// movie-picker - random pick from the IMDb Top 250
#[derive(Parser, Debug)]
#[command(name = "movie-picker")]
#[command(about = "Suggests random movies from the IMDb top chart", long_about = None)]
struct Cli {
    /// Chart page to fetch
    #[arg(long, default_value = DEFAULT_CHART_URL)]
    url: String,

    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// What to do with chart rows whose year or rating cannot be read
    #[arg(long, value_enum, default_value_t = OnMalformedRow::Skip)]
    on_malformed_row: OnMalformedRow,

    /// Print the parsed chart as JSON and exit
    #[arg(long)]
    dump: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OnMalformedRow {
    /// Drop the row, keep the rest
    Skip,
    /// Treat the whole page as unreadable
    Fail,
}

impl From<OnMalformedRow> for MalformedRowPolicy {
    fn from(value: OnMalformedRow) -> Self {
        match value {
            OnMalformedRow::Skip => MalformedRowPolicy::Skip,
            OnMalformedRow::Fail => MalformedRowPolicy::Fail,
        }
    }
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            url: self.url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is the conversation with the user
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let client = ImdbClient::with_config(cli.client_config())
        .context("Failed to set up the HTTP client")?;
    let extractor = TopChartExtractor::with_policy(cli.on_malformed_row.into())
        .context("Failed to set up the chart parser")?;
    let scraper = ImdbScraper::with_extractor(client, extractor);

    let mut stdout = io::stdout();

    if cli.dump {
        let chart = scraper
            .fetch_chart()
            .await
            .context("Failed to fetch the chart")?;
        serde_json::to_writer_pretty(&mut stdout, &chart)?;
        writeln!(stdout)?;
        return Ok(());
    }

    writeln!(stdout, "Fetching data from IMDb...")?;
    let chart = scraper.fetch_chart_or_report(&mut stdout).await;
    info!(movies = chart.len(), "chart loaded");

    let stdin = io::stdin();
    let mut picker = Picker::new(stdin.lock(), stdout.lock(), rand::rng());
    let shown = picker.run(&chart).context("Interactive loop failed")?;
    info!(shown, "done");

    Ok(())
}
