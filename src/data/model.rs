use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ParseDecadeError;
use super::filter::Choice;

// ---------------------------------------------------------------------------
// Decade – ten-year bucket used by the decade filter
// ---------------------------------------------------------------------------

/// A ten-year span identified by its first year, shown as `"1990s"`.
///
/// Labels are the first three digits of a year followed by `"0s"`, so an
/// unknown year (`0`) lands in the `"00s"` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Decade(u32);

impl Decade {
    /// The bucket a release year falls into.
    pub fn of_year(year: u32) -> Self {
        let prefix = leading_three_digits(&year.to_string()).unwrap_or(0);
        Decade(prefix * 10)
    }

    /// Whether `year` lies in `[start, start + 10)`.
    pub fn contains(self, year: u32) -> bool {
        self.0 <= year && year < self.0.saturating_add(10)
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}0s", self.0 / 10)
    }
}

impl FromStr for Decade {
    type Err = ParseDecadeError;

    /// Reads the leading three digits of a label and scales them by ten,
    /// so `"1990s"` and `"1995"` both name the 1990 bucket.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let leading =
            leading_three_digits(s.trim()).ok_or_else(|| ParseDecadeError(s.to_string()))?;
        Ok(Decade(leading * 10))
    }
}

fn leading_three_digits(s: &str) -> Option<u32> {
    let digits: String = s
        .chars()
        .take(3)
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

// ---------------------------------------------------------------------------
// MovieRecord – one cleaned row of the source table
// ---------------------------------------------------------------------------

/// A single movie (one row of the cleaned dataset).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    /// Poster image URL.
    pub poster_url: String,
    pub title: String,
    /// Release year, `0` when the source value was not a number.
    pub released_year: u32,
    /// Age certificate as written in the source ("R", "PG-13", "U", ...).
    pub certificate: String,
    /// Free-form runtime text, e.g. `"142 min"`.
    pub runtime: String,
    /// Genres in source order.
    pub genres: Vec<String>,
    /// IMDb rating in `[0, 10]`.
    pub imdb_rating: f64,
    pub overview: String,
    pub meta_score: f64,
    pub director: String,
    /// Star1..Star4.
    pub stars: [String; 4],
    pub num_votes: u64,
    /// Box office gross with currency formatting stripped, `0` if unknown.
    pub gross: u64,
}

impl MovieRecord {
    /// Genres joined for display: `"Crime, Drama"`.
    pub fn genre_label(&self) -> String {
        self.genres.join(", ")
    }

    /// The four stars joined for display.
    pub fn stars_label(&self) -> String {
        self.stars.join(", ")
    }

    pub fn decade(&self) -> Decade {
        Decade::of_year(self.released_year)
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

// ---------------------------------------------------------------------------
// MovieDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The immutable cleaned table together with the choice lists derived from it.
///
/// There is no way to change a dataset once built; reloading the source is
/// the only way to refresh it.
#[derive(Debug, Clone, Default)]
pub struct MovieDataset {
    movies: Vec<MovieRecord>,
    genres: BTreeSet<String>,
    decades: BTreeSet<Decade>,
    certificates: BTreeSet<String>,
    dropped_rows: usize,
}

impl MovieDataset {
    /// Build the option indices from the cleaned movies.
    ///
    /// `dropped_rows` is the number of source rows rejected by the
    /// completeness check, kept for reporting only.
    pub fn from_movies(movies: Vec<MovieRecord>, dropped_rows: usize) -> Self {
        let mut genres = BTreeSet::new();
        let mut decades = BTreeSet::new();
        let mut certificates = BTreeSet::new();

        for movie in &movies {
            genres.extend(movie.genres.iter().cloned());
            decades.insert(movie.decade());
            certificates.insert(movie.certificate.clone());
        }

        MovieDataset {
            movies,
            genres,
            decades,
            certificates,
            dropped_rows,
        }
    }

    /// All movies in source order.
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Source rows that were discarded because a required field was missing.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Every distinct genre, sorted.
    pub fn genre_options(&self) -> Vec<String> {
        self.genres.iter().cloned().collect()
    }

    /// `Any` followed by every decade present, ordered by label text.
    pub fn decade_options(&self) -> Vec<Choice<Decade>> {
        let mut decades: Vec<Decade> = self.decades.iter().copied().collect();
        decades.sort_by_cached_key(|d| d.to_string());

        std::iter::once(Choice::Any)
            .chain(decades.into_iter().map(Choice::Only))
            .collect()
    }

    /// `Any` followed by every certificate present, sorted.
    pub fn certificate_options(&self) -> Vec<Choice<String>> {
        std::iter::once(Choice::Any)
            .chain(self.certificates.iter().cloned().map(Choice::Only))
            .collect()
    }
}
