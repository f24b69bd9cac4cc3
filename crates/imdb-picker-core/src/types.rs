//! Core data types for the IMDb movie picker
//!
//! Contains the movie record and the chart that holds the records of a
//! single fetch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Display title (e.g., "The Shawshank Redemption")
    pub title: String,

    /// Release year without parentheses (e.g., "1994")
    pub year: String,

    /// Free-text cast summary taken from the title link
    /// (e.g., "Frank Darabont (dir.), Tim Robbins, Morgan Freeman")
    pub cast: String,

    /// IMDb rating (e.g., 9.2)
    pub rating: f64,
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), Rating: {:.1}, Starring: {}",
            self.title, self.year, self.rating, self.cast
        )
    }
}

/// The records parsed from one chart page, in document order
///
/// Created once per fetch and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieChart {
    records: Vec<MovieRecord>,
}

/// Index-aligned column view of a chart: titles, years, casts, ratings
pub type ChartColumns = (Vec<String>, Vec<String>, Vec<String>, Vec<f64>);

impl MovieChart {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// Chart with no records, the result of a failed fetch
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&MovieRecord> {
        self.records.get(idx)
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    /// Splits the chart into four parallel sequences of equal length
    pub fn columns(&self) -> ChartColumns {
        let mut titles = Vec::with_capacity(self.len());
        let mut years = Vec::with_capacity(self.len());
        let mut casts = Vec::with_capacity(self.len());
        let mut ratings = Vec::with_capacity(self.len());

        for record in &self.records {
            titles.push(record.title.clone());
            years.push(record.year.clone());
            casts.push(record.cast.clone());
            ratings.push(record.rating);
        }

        (titles, years, casts, ratings)
    }
}

impl From<Vec<MovieRecord>> for MovieChart {
    fn from(records: Vec<MovieRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a MovieChart {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
