use crate::error::{Error, Result};
use crate::movie::{Category, MovieListResponse, MovieRecord};
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

const LANGUAGE: &str = "en-US";
const PAGE: &str = "1";

pub fn endpoint_url(base_url: &str, category: Category) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), category.endpoint())
}

/// Pulls a human-readable message out of an error body, if there is one.
fn status_message(body: &str) -> Option<String> {
    let root: serde_json::Value = serde_json::from_str(body).ok()?;
    root.get("status_message")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Fetches the first page of a movie listing.
///
/// Non-success statuses become [`Error::ApiRequestFailed`]; anything that goes
/// wrong below HTTP (connect, read, decode) becomes [`Error::FetchFailed`].
pub async fn fetch_movies(
    client: &Client,
    base_url: &str,
    category: Category,
    api_key: &str,
) -> Result<Vec<MovieRecord>> {
    let url = endpoint_url(base_url, category);
    debug!(%url, %category, "requesting movie listing");

    let resp = client
        .get(&url)
        .query(&[("api_key", api_key), ("language", LANGUAGE), ("page", PAGE)])
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = resp.status();
    debug!(status = status.as_u16(), "listing response");

    if !status.is_success() {
        let raw = resp.text().await.unwrap_or_default();
        let message = status_message(&raw)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
        return Err(Error::ApiRequestFailed {
            status: status.as_u16(),
            message,
        });
    }

    let listing: MovieListResponse = resp.json().await?;
    debug!(
        page = ?listing.page,
        total_pages = ?listing.total_pages,
        total_results = ?listing.total_results,
        "listing decoded"
    );
    Ok(listing.into_results())
}

/// Same as [`fetch_movies`] but takes the category by name.
pub async fn fetch_movies_from_str(
    client: &Client,
    base_url: &str,
    category: &str,
    api_key: &str,
) -> Result<Vec<MovieRecord>> {
    let category: Category = category.parse()?;
    fetch_movies(client, base_url, category, api_key).await
}
