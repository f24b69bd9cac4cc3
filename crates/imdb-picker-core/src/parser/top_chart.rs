//! Parser for the IMDb "Top 250" chart table
//!
//! Each movie is one table row: a title cell holding the link and a
//! `(year)` span, and a rating cell holding the score.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::{ChartExtractor, MalformedRowPolicy};
use crate::error::{ImdbError, Result};
use crate::types::{MovieChart, MovieRecord};

/// CSS selectors describing the chart layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSelectors {
    /// One element per movie, containing the year element
    pub row: String,
    /// One link per movie; text is the title, `title` attribute the cast
    pub link: String,
    /// One element per movie holding the numeric rating
    pub rating: String,
    /// Year element, looked up inside each row
    pub year: String,
}

impl Default for ChartSelectors {
    fn default() -> Self {
        Self {
            row: "td.titleColumn".to_string(),
            link: "td.titleColumn a".to_string(),
            rating: "td.ratingColumn strong".to_string(),
            year: "span.secondaryInfo".to_string(),
        }
    }
}

/// Extractor for the classic table layout of the top chart
#[derive(Debug, Clone)]
pub struct TopChartExtractor {
    selectors: ChartSelectors,
    row: Selector,
    link: Selector,
    rating: Selector,
    year: Selector,
    policy: MalformedRowPolicy,
}

impl TopChartExtractor {
    /// Create an extractor with the default selectors, skipping malformed rows
    pub fn new() -> Result<Self> {
        Self::with_selectors(ChartSelectors::default(), MalformedRowPolicy::default())
    }

    /// Create an extractor with the default selectors and the given policy
    pub fn with_policy(policy: MalformedRowPolicy) -> Result<Self> {
        Self::with_selectors(ChartSelectors::default(), policy)
    }

    /// Create an extractor with custom selectors
    ///
    /// # Errors
    /// Returns `ParseError` if any selector is not valid CSS
    pub fn with_selectors(selectors: ChartSelectors, policy: MalformedRowPolicy) -> Result<Self> {
        Ok(Self {
            row: compile(&selectors.row)?,
            link: compile(&selectors.link)?,
            rating: compile(&selectors.rating)?,
            year: compile(&selectors.year)?,
            selectors,
            policy,
        })
    }

    pub fn selectors(&self) -> &ChartSelectors {
        &self.selectors
    }

    pub fn policy(&self) -> MalformedRowPolicy {
        self.policy
    }

    fn parse_row(
        &self,
        row: &ElementRef,
        link: &ElementRef,
        rating: &ElementRef,
    ) -> Result<MovieRecord> {
        let year = row
            .select(&self.year)
            .next()
            .map(|el| strip_year(&element_text(&el)))
            .ok_or_else(|| ImdbError::ElementNotFound(self.selectors.year.clone()))?;

        let title = element_text(link).trim().to_string();
        let cast = link.value().attr("title").unwrap_or_default().to_string();
        let rating = parse_rating(&element_text(rating))?;

        Ok(MovieRecord {
            title,
            year,
            cast,
            rating,
        })
    }
}

impl ChartExtractor for TopChartExtractor {
    fn extract(&self, document: &Html) -> Result<MovieChart> {
        let rows: Vec<ElementRef> = document.select(&self.row).collect();
        let links: Vec<ElementRef> = document.select(&self.link).collect();
        let ratings: Vec<ElementRef> = document.select(&self.rating).collect();

        for (selector, found) in [
            (&self.selectors.row, rows.len()),
            (&self.selectors.link, links.len()),
            (&self.selectors.rating, ratings.len()),
        ] {
            if found == 0 {
                return Err(ImdbError::ElementNotFound(selector.clone()));
            }
        }

        // Rows are paired by position, so the three selections must agree
        if rows.len() != links.len() || rows.len() != ratings.len() {
            return Err(ImdbError::ParseError(format!(
                "Row count mismatch: {} rows, {} links, {} ratings",
                rows.len(),
                links.len(),
                ratings.len()
            )));
        }

        let mut records = Vec::with_capacity(rows.len());
        for (idx, ((row, link), rating)) in rows.iter().zip(&links).zip(&ratings).enumerate() {
            match self.parse_row(row, link, rating) {
                Ok(record) => records.push(record),
                Err(e) if self.policy == MalformedRowPolicy::Skip => {
                    warn!(row = idx, error = %e, "skipping malformed chart row");
                }
                Err(e) => return Err(e),
            }
        }

        if records.is_empty() {
            return Err(ImdbError::ParseError(
                "No chart row could be read".to_string(),
            ));
        }

        debug!(records = records.len(), "extracted chart");
        Ok(MovieChart::new(records))
    }
}

/// Parses top chart HTML with the default layout
///
/// # Arguments
/// * `html` - Raw HTML string of the chart page
///
/// # Errors
/// Returns a structural error if the page does not match the layout
pub fn parse_top_chart(html: &str) -> Result<MovieChart> {
    TopChartExtractor::new()?.extract_html(html)
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ImdbError::ParseError(format!("Invalid selector {:?}: {:?}", css, e)))
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// Removes surrounding whitespace and parentheses: "(1994)" -> "1994"
fn strip_year(text: &str) -> String {
    text.trim()
        .trim_matches(|c: char| c == '(' || c == ')')
        .to_string()
}

fn parse_rating(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ImdbError::InvalidRating(trimmed.to_string())),
    }
}
