//! Chart fetcher combining the HTTP client and an extractor
//!
//! Besides the typed [`ImdbScraper::fetch_chart`], it offers
//! [`ImdbScraper::fetch_chart_or_report`], which never fails: problems are
//! reported to the user and an empty chart is returned instead.

use std::io::Write;

use tracing::warn;

use crate::client::{ClientConfig, ImdbClient};
use crate::error::{ImdbError, Result};
use crate::parser::{ChartExtractor, TopChartExtractor};
use crate::types::MovieChart;

/// Shown when the page arrived but did not look like the chart
pub const PARSE_FAILURE_MESSAGE: &str =
    "Failed to parse IMDb data. Check the structure or anti-scraping measures.";

/// Main scraper API: one fetch, one extraction
pub struct ImdbScraper<E = TopChartExtractor> {
    client: ImdbClient,
    extractor: E,
}

impl ImdbScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new scraper with custom client configuration and the
    /// default top chart layout
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = ImdbClient::with_config(config)?;
        Ok(Self::with_extractor(client, TopChartExtractor::new()?))
    }
}

impl<E: ChartExtractor> ImdbScraper<E> {
    /// Create a scraper around an existing client and extraction strategy
    pub fn with_extractor(client: ImdbClient, extractor: E) -> Self {
        Self { client, extractor }
    }

    pub fn client(&self) -> &ImdbClient {
        &self.client
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Fetch the chart page and extract its records
    ///
    /// # Errors
    /// - `HttpError`, `Status`, `NotFound` if the fetch fails
    /// - `ElementNotFound`, `ParseError`, `InvalidRating` if the page
    ///   does not match the extractor's layout
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> imdb_picker_core::Result<()> {
    /// use imdb_picker_core::ImdbScraper;
    /// let scraper = ImdbScraper::new()?;
    /// let chart = scraper.fetch_chart().await?;
    /// for movie in &chart {
    ///     println!("{}", movie);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_chart(&self) -> Result<MovieChart> {
        let html = self.client.fetch().await?;
        self.extractor.extract_html(&html)
    }

    /// Fetch the chart, turning any failure into a diagnostic line on
    /// `out` and an empty chart
    pub async fn fetch_chart_or_report<W: Write>(&self, out: &mut W) -> MovieChart {
        match self.fetch_chart().await {
            Ok(chart) => chart,
            Err(e) => {
                warn!(url = %self.client.url(), error = %e, "chart fetch failed");
                if let Err(io) = writeln!(out, "{}", failure_message(&e)) {
                    warn!(error = %io, "could not write fetch diagnostic");
                }
                MovieChart::empty()
            }
        }
    }
}

/// User-facing description of a failed fetch
pub fn failure_message(error: &ImdbError) -> String {
    if error.is_structural() {
        PARSE_FAILURE_MESSAGE.to_string()
    } else {
        format!("Error fetching data: {}", error)
    }
}
