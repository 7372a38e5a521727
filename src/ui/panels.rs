use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, ResultsView};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Select your preferences");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Owned copies so the criteria can be edited below.
    let genres = dataset.genre_options();
    let decades = dataset.decade_options();
    let certificates = dataset.certificate_options();

    let before = state.criteria.clone();
    let criteria = &mut state.criteria;

    ui.strong("Genre");
    egui::ComboBox::from_id_salt("genre")
        .selected_text(criteria.genre.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for genre in &genres {
                let text = RichText::new(genre).color(state.genre_colors.color_for(genre));
                ui.selectable_value(&mut criteria.genre, genre.clone(), text);
            }
        });
    ui.add_space(6.0);

    ui.strong("Decade");
    egui::ComboBox::from_id_salt("decade")
        .selected_text(criteria.decade.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for decade in &decades {
                ui.selectable_value(&mut criteria.decade, decade.clone(), decade.to_string());
            }
        });
    ui.add_space(6.0);

    ui.strong("Minimum IMDb rating");
    ui.add(egui::Slider::new(&mut criteria.min_rating, 0.0..=10.0).step_by(0.1));
    ui.add_space(6.0);

    ui.strong("Certificate");
    egui::ComboBox::from_id_salt("certificate")
        .selected_text(criteria.certificate.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for cert in &certificates {
                ui.selectable_value(&mut criteria.certificate, cert.clone(), cert.to_string());
            }
        });
    ui.add_space(6.0);

    ui.strong("Director (optional)");
    ui.text_edit_singleline(&mut criteria.director_query);

    if state.criteria != before {
        state.refilter();
    }

    ui.separator();
    ui.small("Tip: search for your favourite director or choose a high rating for top picks.");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.dataset.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export matches as JSON…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} movies loaded ({} incomplete rows dropped), {} matching",
                ds.len(),
                ds.dropped_rows(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        ui.selectable_value(&mut state.view, ResultsView::Cards, "Cards");
        ui.selectable_value(&mut state.view, ResultsView::Plot, "Rating vs year");

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open movie table")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load_path(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export matching movies")
        .add_filter("JSON", &["json"])
        .set_file_name("movies.json")
        .save_file();

    if let Some(path) = file {
        match state.export_visible(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
