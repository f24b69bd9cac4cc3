//! IMDb Movie Picker Core Library
//!
//! Fetches the IMDb top chart, extracts its movies and picks random ones
//! interactively.
//!
//! # Overview
//!
//! - [`ImdbClient`] performs the single chart request with a browser
//!   User-Agent and a configurable timeout
//! - [`ChartExtractor`] turns a parsed page into a [`MovieChart`]; the
//!   page layout lives in [`TopChartExtractor`] and can be replaced
//! - [`ImdbScraper`] combines both and reports failures as an empty chart
//! - [`Picker`] runs the "another movie?" loop over injected I/O
//!
//! # Example
//!
//! ```no_run
//! use imdb_picker_core::{ImdbScraper, Picker, Result};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let scraper = ImdbScraper::new()?;
//!     let mut stdout = std::io::stdout();
//!     let chart = scraper.fetch_chart_or_report(&mut stdout).await;
//!
//!     let stdin = std::io::stdin();
//!     let mut picker = Picker::new(stdin.lock(), stdout, rand::rng());
//!     picker.run(&chart)?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod fetcher;
pub mod parser;
pub mod picker;
mod types;

// Re-export client types
pub use client::{ClientConfig, ImdbClient, DEFAULT_CHART_URL, DEFAULT_USER_AGENT};

// Re-export error types
pub use error::{ImdbError, Result};

// Re-export extraction strategy
pub use parser::{parse_top_chart, ChartExtractor, ChartSelectors, MalformedRowPolicy, TopChartExtractor};

// Re-export main scraper API
pub use fetcher::{failure_message, ImdbScraper, PARSE_FAILURE_MESSAGE};

// Re-export the interactive loop
pub use picker::Picker;

// Re-export data types
pub use types::{ChartColumns, MovieChart, MovieRecord};
