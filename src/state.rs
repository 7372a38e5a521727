use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::color::GenreColors;
use rusty_reel::data::export::write_json;
use rusty_reel::data::{
    filtered_indices, load_file, Choice, FilterCriteria, MovieDataset, MovieRecord,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// How matching movies are shown in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    Cards,
    Plot,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<MovieDataset>,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Indices of movies passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    pub genre_colors: GenreColors,

    pub view: ResultsView,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(min_rating: f64) -> Self {
        let mut criteria = FilterCriteria::for_genre(String::new());
        criteria.min_rating = min_rating;
        Self {
            dataset: None,
            criteria,
            visible_indices: Vec::new(),
            genre_colors: GenreColors::default(),
            view: ResultsView::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and re-apply the criteria to it.
    ///
    /// Selections the new data cannot satisfy fall back to the first genre
    /// and to `Any`.
    pub fn set_dataset(&mut self, dataset: MovieDataset) {
        let genres = dataset.genre_options();
        if !genres.contains(&self.criteria.genre) {
            self.criteria.genre = genres.first().cloned().unwrap_or_default();
        }
        if !dataset.decade_options().contains(&self.criteria.decade) {
            self.criteria.decade = Choice::Any;
        }
        if !dataset
            .certificate_options()
            .contains(&self.criteria.certificate)
        {
            self.criteria.certificate = Choice::Any;
        }

        self.genre_colors = GenreColors::new(&genres);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Load a CSV file and make it the current dataset.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let dataset = load_file(path)?;
        log::info!(
            "Loaded {} movies from {} ({} rows dropped)",
            dataset.len(),
            path.display(),
            dataset.dropped_rows()
        );
        self.set_dataset(dataset);
        Ok(())
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => filtered_indices(ds, &self.criteria),
            None => Vec::new(),
        };
    }

    /// Movies passing the current criteria, in dataset order.
    pub fn visible_movies(&self) -> Vec<&MovieRecord> {
        match &self.dataset {
            Some(ds) => self
                .visible_indices
                .iter()
                .filter_map(|&i| ds.get(i))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Write the current matches to `path` as JSON.
    pub fn export_visible(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let movies = self.visible_movies();
        write_json(BufWriter::new(file), &movies)?;
        log::info!("Exported {} movies to {}", movies.len(), path.display());
        Ok(())
    }
}
