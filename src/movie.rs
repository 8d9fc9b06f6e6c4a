use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Listing requested from the upstream catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Playing,
    Popular,
    Top,
    Upcoming,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Playing,
        Category::Popular,
        Category::Top,
        Category::Upcoming,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Playing => "playing",
            Category::Popular => "popular",
            Category::Top => "top",
            Category::Upcoming => "upcoming",
        }
    }

    /// Upstream path segment for this listing.
    pub fn endpoint(self) -> &'static str {
        match self {
            Category::Playing => "now_playing",
            Category::Popular => "popular",
            Category::Top => "top_rated",
            Category::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

/// One movie as returned by the listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
}

impl MovieRecord {
    /// Year part of `release_date`, if the date is present and non-empty.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .and_then(|d| d.split('-').next())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MovieListResponse {
    pub page: Option<u32>,
    pub total_pages: Option<u32>,
    pub total_results: Option<u64>,
    pub results: Option<Vec<MovieRecord>>,
}

impl MovieListResponse {
    pub fn into_results(self) -> Vec<MovieRecord> {
        self.results.unwrap_or_default()
    }
}
