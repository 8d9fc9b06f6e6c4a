use crate::api::fetch_movies;
use crate::cli::Args;
use crate::config::Config;
use crate::csv_writer::write_movies_to_csv;
use crate::error::Error;
use crate::init;
use crate::movie::MovieRecord;
use crate::{loge, logok};
use anyhow::{Context, Result};
use reqwest::Client;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};
use tracing::debug;

/// One console line: `- Title (Year) - Rating: 7.5`.
pub fn format_listing_line(movie: &MovieRecord) -> String {
    let title = movie.title.as_deref().unwrap_or_default();
    let year = movie.release_year().unwrap_or("N/A");
    let rating = movie
        .vote_average
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!("- {title} ({year}) - Rating: {rating}")
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Maps a user-supplied filename to a path directly inside `root`.
///
/// Directory prefixes are stripped, but any `..` component rejects the whole
/// request. `root` must already be absolute and canonical.
pub fn resolve_save_path(root: &Path, requested: &str) -> crate::Result<PathBuf> {
    let requested_path = Path::new(requested);
    if requested_path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(Error::InvalidSavePath(format!(
            "'{requested}' must not contain parent directory segments"
        )));
    }

    // Last raw segment; `Path::file_name` would fold a trailing `.` away.
    let base = requested
        .trim_end_matches(['/', MAIN_SEPARATOR])
        .rsplit(['/', MAIN_SEPARATOR])
        .next()
        .unwrap_or_default();
    if base.is_empty() || base == "." || base == ".." {
        return Err(Error::InvalidSavePath(format!(
            "'{requested}' is not a usable filename"
        )));
    }

    let resolved = normalize_lexically(&root.join(base));

    let root_text = root.to_string_lossy();
    let prefix = if root_text.ends_with(MAIN_SEPARATOR) {
        root_text.into_owned()
    } else {
        format!("{root_text}{MAIN_SEPARATOR}")
    };
    if !resolved.to_string_lossy().starts_with(&prefix) {
        return Err(Error::InvalidSavePath(format!(
            "files can only be saved within '{}'",
            root.display()
        )));
    }

    Ok(resolved)
}

/// Runs one invocation and returns the process exit code.
///
/// Fetch and path-safety failures propagate as errors; a failed CSV write is
/// reported and the run still succeeds.
pub async fn run(args: &Args, config: &Config) -> Result<i32> {
    let output_root = match init::ensure_output_dir(&config.output_dir).await {
        Ok(root) => root,
        Err(e) => {
            loge(format!(
                "Error creating output directory '{}': {:#}",
                config.output_dir.display(),
                e
            ));
            return Ok(1);
        }
    };
    debug!(root = %output_root.display(), "output directory ready");

    let client = Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    println!("Fetching {} movies...", args.category);
    let movies = fetch_movies(
        &client,
        &config.base_url,
        args.category,
        &config.api_key,
    )
    .await?;

    if movies.is_empty() {
        println!("No movies found for this category.");
        return Ok(0);
    }

    println!("\nResults:");
    for movie in &movies {
        println!("{}", format_listing_line(movie));
    }

    let Some(requested) = args.save.as_deref() else {
        return Ok(0);
    };

    let path = resolve_save_path(&output_root, requested)?;
    match write_movies_to_csv(&movies, &path).await {
        Ok(()) => logok(format!("Results successfully saved to {}", path.display())),
        Err(e) => loge(format!("Error saving results to CSV: {e}")),
    }

    Ok(0)
}
