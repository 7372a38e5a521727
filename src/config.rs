use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// File the IMDb top 1000 export is usually saved as.
const DEFAULT_DATA_FILE: &str = "imdb_top_1000.csv";
const DEFAULT_MIN_RATING: f64 = 7.0;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// CSV to load at startup, if any.
    pub data_path: Option<PathBuf>,
    /// Initial position of the minimum rating slider.
    pub min_rating: f64,
}

impl AppConfig {
    /// Resolve startup settings.
    ///
    /// Data path: first CLI argument, then `RUSTY_REEL_DATA`, then
    /// `imdb_top_1000.csv` in the working directory when it exists.
    pub fn from_env() -> Result<Self> {
        let data_path = std::env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("RUSTY_REEL_DATA").map(PathBuf::from))
            .or_else(|| {
                let fallback = PathBuf::from(DEFAULT_DATA_FILE);
                fallback.is_file().then_some(fallback)
            });

        let min_rating = match std::env::var("RUSTY_REEL_MIN_RATING") {
            Ok(raw) => parse_min_rating(&raw)?,
            Err(_) => DEFAULT_MIN_RATING,
        };

        Ok(Self {
            data_path,
            min_rating,
        })
    }
}

fn parse_min_rating(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("RUSTY_REEL_MIN_RATING is not a number: '{raw}'"))?;
    if !(0.0..=10.0).contains(&value) {
        bail!("RUSTY_REEL_MIN_RATING must lie within 0..=10, got {value}");
    }
    Ok(value)
}
