use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Rating vs release year scatter (central panel)
// ---------------------------------------------------------------------------

/// Scatter of release year against IMDb rating for the matching movies,
/// one series per leading genre.
pub fn rating_plot(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a movie table to get started  (File → Open…)");
        });
        return;
    }

    // Leading genre → points, so each genre gets one legend entry.
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for movie in state.visible_movies() {
        // Unknown years would squash the axis.
        if movie.released_year == 0 {
            continue;
        }
        let genre = movie.genres.first().map(String::as_str).unwrap_or("");
        series
            .entry(genre)
            .or_default()
            .push([f64::from(movie.released_year), movie.imdb_rating]);
    }

    Plot::new("rating_plot")
        .legend(Legend::default())
        .x_axis_label("Released year")
        .y_axis_label("IMDb rating")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (genre, points) in series {
                let color = if genre.is_empty() {
                    Color32::LIGHT_BLUE
                } else {
                    state.genre_colors.color_for(genre)
                };
                let name = if genre.is_empty() { "(none)" } else { genre };
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(name)
                        .color(color)
                        .radius(3.0),
                );
            }
        });
}
