use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use csv::StringRecord;

use super::error::DataLoadError;
use super::model::{MovieDataset, MovieRecord};

/// Columns every source must provide, in the order they appear in the
/// IMDb top 1000 export. Anything else in the header is ignored.
pub const REQUIRED_COLUMNS: [&str; 16] = [
    "Poster_Link",
    "Series_Title",
    "Released_Year",
    "Certificate",
    "Runtime",
    "Genre",
    "IMDB_Rating",
    "Overview",
    "Meta_score",
    "Director",
    "Star1",
    "Star2",
    "Star3",
    "Star4",
    "No_of_Votes",
    "Gross",
];

/// Cell contents that count as "no value", as dataframe CSV readers treat them.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and clean a movie CSV file.
pub fn load_file(path: &Path) -> anyhow::Result<MovieDataset> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let dataset =
        load_reader(file).with_context(|| format!("loading movies from {}", path.display()))?;
    Ok(dataset)
}

/// Load and clean movie CSV text already held in memory.
pub fn load_csv_str(text: &str) -> Result<MovieDataset, DataLoadError> {
    load_reader(text.as_bytes())
}

/// Load and clean movie CSV from any reader.
///
/// Rules:
///
/// - The first row is a header; names are trimmed before matching.
/// - All of [`REQUIRED_COLUMNS`] must be present, otherwise every missing
///   one is reported in a single [`DataLoadError::MissingColumns`].
/// - Rows missing any required value are dropped, not patched.
/// - `IMDB_Rating` must be a number in `0..=10`; the other numeric
///   columns never fail and fall back to `0` instead.
pub fn load_reader<R: Read>(input: R) -> Result<MovieDataset, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut movies = Vec::new();
    let mut dropped = 0usize;

    for (row_idx0, result) in reader.records().enumerate() {
        // 1-based, and the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        if record.len() > headers.len() {
            return Err(DataLoadError::Malformed {
                row: user_row,
                message: format!(
                    "expected at most {} fields, found {}",
                    headers.len(),
                    record.len()
                ),
            });
        }

        match columns.fields(&record) {
            Ok(fields) => movies.push(clean_row(user_row, fields)?),
            Err(column) => {
                log::debug!("row {user_row}: dropped, no value for '{column}'");
                dropped += 1;
            }
        }
    }

    log::info!(
        "Loaded {} movies ({} incomplete rows dropped)",
        movies.len(),
        dropped
    );

    Ok(MovieDataset::from_movies(movies, dropped))
}

// ---------------------------------------------------------------------------
// Header resolution
// ---------------------------------------------------------------------------

/// Position of each required column in the source header.
struct ColumnIndex([usize; REQUIRED_COLUMNS.len()]);

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();

        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            match headers.iter().position(|h| h == name) {
                Some(idx) => *slot = idx,
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(DataLoadError::MissingColumns { missing });
        }
        Ok(ColumnIndex(positions))
    }

    /// The required values of one record, or the name of the first column
    /// that has no value.
    fn fields<'r>(
        &self,
        record: &'r StringRecord,
    ) -> Result<[&'r str; REQUIRED_COLUMNS.len()], &'static str> {
        let mut out = [""; REQUIRED_COLUMNS.len()];
        for ((slot, &idx), name) in out.iter_mut().zip(&self.0).zip(REQUIRED_COLUMNS) {
            match record.get(idx) {
                Some(value) if !is_missing(value) => *slot = value,
                _ => return Err(name),
            }
        }
        Ok(out)
    }
}

fn is_missing(value: &str) -> bool {
    value.is_empty() || NA_TOKENS.contains(&value)
}

// ---------------------------------------------------------------------------
// Row cleaning
// ---------------------------------------------------------------------------

fn clean_row(
    row: usize,
    fields: [&str; REQUIRED_COLUMNS.len()],
) -> Result<MovieRecord, DataLoadError> {
    let [
        poster,
        title,
        year,
        certificate,
        runtime,
        genre,
        rating,
        overview,
        meta,
        director,
        star1,
        star2,
        star3,
        star4,
        votes,
        gross,
    ] = fields;

    let imdb_rating = parse_float(row, "IMDB_Rating", rating)?;
    if !(0.0..=10.0).contains(&imdb_rating) {
        return Err(invalid(row, "IMDB_Rating", rating, "rating must lie within 0..=10"));
    }

    Ok(MovieRecord {
        poster_url: poster.to_string(),
        title: title.to_string(),
        released_year: parse_year(year),
        certificate: certificate.to_string(),
        runtime: runtime.to_string(),
        genres: split_genres(genre),
        imdb_rating,
        overview: overview.to_string(),
        meta_score: parse_score(meta),
        director: director.to_string(),
        stars: [
            star1.to_string(),
            star2.to_string(),
            star3.to_string(),
            star4.to_string(),
        ],
        num_votes: parse_votes(votes),
        gross: clean_gross(gross),
    })
}

/// Numeric year, or `0` for anything that is not a non-negative number.
fn parse_year(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(year) if year.is_finite() && year >= 0.0 => year as u32,
        _ => 0,
    }
}

/// `"$28,341,469"` → `28341469`; anything unparsable → `0`.
fn clean_gross(raw: &str) -> u64 {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match kept.parse::<f64>() {
        Ok(v) if v.is_finite() => v as u64,
        _ => 0,
    }
}

/// Metascore as a number, `0.0` when it is not one.
fn parse_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Vote count, accepting `"269197.0"` and `"1,234"`; anything else → `0`.
fn parse_votes(raw: &str) -> u64 {
    let kept: String = raw.trim().chars().filter(|c| *c != ',').collect();
    match kept.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v as u64,
        _ => 0,
    }
}

fn split_genres(raw: &str) -> Vec<String> {
    raw.split(", ")
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_float(row: usize, column: &str, raw: &str) -> Result<f64, DataLoadError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(invalid(row, column, raw, "value is not finite")),
        Err(e) => Err(invalid(row, column, raw, &e.to_string())),
    }
}

fn invalid(row: usize, column: &str, raw: &str, message: &str) -> DataLoadError {
    DataLoadError::InvalidField {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: message.to_owned(),
    }
}
