use crate::error::{Error, Result};
use std::path::PathBuf;

pub const API_KEY_VAR: &str = "TMDB_API_KEY";
pub const BASE_URL_VAR: &str = "TMDB_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/movie";
pub const OUTPUT_DIR: &str = "output";

/// Explicit per-run configuration handed to the runner.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }

    /// Reads the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingCredential(API_KEY_VAR))?;

        let mut config = Self::new(api_key);
        if let Some(base) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = base.trim().trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
