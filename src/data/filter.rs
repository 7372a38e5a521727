use std::fmt;

use super::model::{Decade, MovieDataset, MovieRecord};

// ---------------------------------------------------------------------------
// Choice – "Any" or one concrete value
// ---------------------------------------------------------------------------

/// Selection for an optional criterion: no constraint, or exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Choice<T> {
    #[default]
    Any,
    Only(T),
}

impl<T> Choice<T> {
    /// `Any` admits everything, `Only(v)` defers to `pred(v)`.
    pub fn admits(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(v) => pred(v),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Any => write!(f, "Any"),
            Choice::Only(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria – the user's constraints for one query
// ---------------------------------------------------------------------------

/// Constraints applied by [`filter_movies`]. All of them must hold.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Exact, case-sensitive genre name.
    pub genre: String,
    pub decade: Choice<Decade>,
    /// Inclusive lower bound on the IMDb rating.
    pub min_rating: f64,
    pub certificate: Choice<String>,
    /// Case-insensitive substring of the director's name; empty means no constraint.
    pub director_query: String,
}

impl FilterCriteria {
    /// Criteria that only pin the genre.
    pub fn for_genre(genre: impl Into<String>) -> Self {
        FilterCriteria {
            genre: genre.into(),
            decade: Choice::Any,
            min_rating: 0.0,
            certificate: Choice::Any,
            director_query: String::new(),
        }
    }
}

/// Criteria with the director query lower-cased once per scan.
struct Matcher<'a> {
    criteria: &'a FilterCriteria,
    director_needle: Option<String>,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        let director_needle = if criteria.director_query.is_empty() {
            None
        } else {
            Some(criteria.director_query.to_lowercase())
        };
        Matcher {
            criteria,
            director_needle,
        }
    }

    // Order: genre, rating, decade, certificate, director.
    fn matches(&self, movie: &MovieRecord) -> bool {
        let c = self.criteria;
        movie.has_genre(&c.genre)
            && movie.imdb_rating >= c.min_rating
            && c.decade.admits(|d| d.contains(movie.released_year))
            && c.certificate.admits(|cert| movie.certificate == *cert)
            && match self.director_needle.as_deref() {
                None => true,
                Some(needle) => movie.director.to_lowercase().contains(needle),
            }
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return indices of movies that pass all criteria, in dataset order.
pub fn filtered_indices(dataset: &MovieDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    dataset
        .movies()
        .iter()
        .enumerate()
        .filter(|(_, movie)| matcher.matches(movie))
        .map(|(i, _)| i)
        .collect()
}

/// Return the movies that pass all criteria, in dataset order.
///
/// Never fails: criteria nothing satisfies simply yield an empty vector.
pub fn filter_movies<'a>(
    dataset: &'a MovieDataset,
    criteria: &FilterCriteria,
) -> Vec<&'a MovieRecord> {
    let matcher = Matcher::new(criteria);
    dataset
        .movies()
        .iter()
        .filter(|movie| matcher.matches(movie))
        .collect()
}
