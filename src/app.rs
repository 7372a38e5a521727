use eframe::egui;

use crate::state::{AppState, ResultsView};
use crate::ui::{panels, plot, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyReelApp {
    pub state: AppState,
}

impl RustyReelApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for RustyReelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: matches ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            ResultsView::Cards => results::movie_cards(ui, &self.state),
            ResultsView::Plot => plot::rating_plot(ui, &self.state),
        });
    }
}
