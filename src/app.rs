use eframe::egui;

use crate::config::Config;
use crate::state::{AppState, Page};
use crate::ui::{panels, plot, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ReviewPulseApp {
    pub state: AppState,
}

impl ReviewPulseApp {
    pub fn new(config: &Config) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for ReviewPulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The Home view always reflects the store on disk.
        if self.state.page == Page::Home {
            self.state.reload_if_stale();
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: menu + filters ----
        egui::SidePanel::left("side_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Home => plot::home_view(ui, &mut self.state),
            Page::Model => views::model_view(ui),
            Page::Ingest => views::ingest_view(ui, &mut self.state),
            Page::About => views::about_view(ui),
        });
    }
}
