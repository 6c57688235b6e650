use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, INGEST_CHOICES, IngestNotice};

// ---------------------------------------------------------------------------
// Model page – static word-cloud images
// ---------------------------------------------------------------------------

pub fn model_view(ui: &mut Ui) {
    ui.heading("Training and Model Evaluation");
    ui.separator();

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].vertical_centered(|ui: &mut Ui| {
            ui.add(
                egui::Image::new(egui::include_image!("../../assets/wordcloud_pos.png"))
                    .max_width(ui.available_width() * 0.9),
            );
            ui.weak("Word cloud for positive sentiment");
        });
        cols[1].vertical_centered(|ui: &mut Ui| {
            ui.add(
                egui::Image::new(egui::include_image!("../../assets/wordcloud_neg.png"))
                    .max_width(ui.available_width() * 0.9),
            );
            ui.weak("Word cloud for negative sentiment");
        });
    });
}

// ---------------------------------------------------------------------------
// Ingest page – count selector + submit
// ---------------------------------------------------------------------------

pub fn ingest_view(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Ingest Tool");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Number of posts");
        egui::ComboBox::from_id_salt("ingest_posts")
            .selected_text(state.ingest_posts.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for n in INGEST_CHOICES {
                    if ui
                        .selectable_label(state.ingest_posts == n, n.to_string())
                        .clicked()
                    {
                        state.ingest_posts = n;
                    }
                }
            });
    });

    // The ingest command runs synchronously and blocks the frame until done.
    if ui.button("Submit").clicked() {
        state.run_ingest();
    }

    match &state.ingest_notice {
        Some(IngestNotice::Success) => {
            ui.label(RichText::new("Done! New posts will appear on the Home page.")
                .color(Color32::GREEN));
        }
        Some(IngestNotice::Failure(msg)) => {
            ui.label(RichText::new(format!("Ingest failed: {msg}")).color(Color32::RED));
        }
        None => {}
    }
}

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

pub fn about_view(ui: &mut Ui) {
    ui.heading("About");
    ui.separator();
    ui.label(
        "Review Pulse charts sentiment predictions for movie reviews collected \
         from the r/movies subreddit. Reviews are fetched and labeled by an \
         external ingest tool; this dashboard loads the labeled store, derives \
         display columns, and renders the filtered result.",
    );
}
