//! HTML extraction for chart pages
//!
//! The page layout is owned by IMDb and changes without notice, so
//! extraction sits behind [`ChartExtractor`] and can be swapped or fed
//! fixture documents in tests.

pub mod top_chart;

use scraper::Html;

use crate::error::Result;
use crate::types::MovieChart;

pub use top_chart::{parse_top_chart, ChartSelectors, TopChartExtractor};

/// Turns a parsed chart page into records
pub trait ChartExtractor {
    /// Extract every record from an already parsed document
    ///
    /// # Errors
    /// Returns a structural error (`ElementNotFound`, `ParseError`,
    /// `InvalidRating`) when the document does not look like a chart
    fn extract(&self, document: &Html) -> Result<MovieChart>;

    /// Parse raw markup and extract records from it
    fn extract_html(&self, html: &str) -> Result<MovieChart> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }
}

/// What to do with a row whose year or rating cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Drop the row and keep the rest of the chart
    #[default]
    Skip,
    /// Abort the whole extraction
    Fail,
}
