use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use rusty_reel::data::MovieRecord;

const POSTER_WIDTH: f32 = 150.0;

// ---------------------------------------------------------------------------
// Movie cards (central panel)
// ---------------------------------------------------------------------------

/// Render one card per matching movie, poster on the left.
pub fn movie_cards(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a movie table to get started  (File → Open…)");
        });
        return;
    }

    ui.heading(format!("Recommended {} movies", state.criteria.genre));
    ui.separator();

    let movies = state.visible_movies();
    if movies.is_empty() {
        ui.label(
            RichText::new("No movies found. Try adjusting your filters.")
                .color(Color32::from_rgb(230, 180, 60)),
        );
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for movie in movies {
                movie_card(ui, state, movie);
                ui.separator();
            }
        });
}

fn movie_card(ui: &mut Ui, state: &AppState, movie: &MovieRecord) {
    ui.horizontal_top(|ui: &mut Ui| {
        ui.add(
            egui::Image::from_uri(movie.poster_url.as_str())
                .max_width(POSTER_WIDTH)
                .rounding(4.0),
        );

        ui.vertical(|ui: &mut Ui| {
            ui.label(
                RichText::new(format!("{} ({})", movie.title, movie.released_year))
                    .heading()
                    .strong(),
            );
            ui.label(format!("IMDb rating: {}", movie.imdb_rating));

            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.label("Genre:").on_hover_text(movie.genre_label());
                for (i, genre) in movie.genres.iter().enumerate() {
                    let text = if i + 1 < movie.genres.len() {
                        format!("{genre},")
                    } else {
                        genre.clone()
                    };
                    ui.label(RichText::new(text).color(state.genre_colors.color_for(genre)));
                }
            });

            ui.label(format!(
                "Certificate: {} | Runtime: {}",
                movie.certificate, movie.runtime
            ));
            ui.label(format!("Directed by: {}", movie.director));
            ui.label(format!("Starring: {}", movie.stars_label()));
            ui.label(format!("Overview: {}", movie.overview));
        });
    });
}
