/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   IMDb CSV text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  trim header, drop incomplete rows, clean year/gross/genres
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MovieDataset  │  Vec<MovieRecord>, genre/decade/certificate options
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → matching movies, in source order
///   └──────────┘
/// ```

pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;

pub use error::{DataLoadError, ParseDecadeError};
pub use filter::{filter_movies, filtered_indices, Choice, FilterCriteria};
pub use loader::{load_csv_str, load_file, load_reader};
pub use model::{Decade, MovieDataset, MovieRecord};
