use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{DateOrder, TypeFilter};
use crate::data::model::PostType;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – menu + filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar: logo, page menu, and (on Home) the filter controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(ui.available_width() * 0.8)
                .max_height(100.0)
                .rounding(4.0),
        );
    });
    ui.add_space(4.0);

    ui.heading("Menu");
    ui.separator();

    for (page, label) in [
        (Page::Home, "Home"),
        (Page::Model, "Model"),
        (Page::Ingest, "Ingest"),
        (Page::About, "About"),
    ] {
        if ui.selectable_label(state.page == page, label).clicked() {
            state.page = page;
        }
    }

    if state.page != Page::Home {
        return;
    }

    ui.add_space(8.0);
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No reviews loaded.");
        return;
    };

    // Clone the label index so we can mutate state inside the widgets.
    let labels = dataset.date_labels.clone();
    let mut changed = false;

    // ---- Date range: start / end combos over the distinct label set ----
    ui.strong("Select Date Range");
    if let Some((start, end)) = &mut state.filters.date_range {
        changed |= label_combo(ui, "date_start", "From", start, &labels);
        changed |= label_combo(ui, "date_end", "To", end, &labels);
    } else {
        ui.label("No dates available.");
    }

    let mut chronological = state.filters.date_order == DateOrder::Chronological;
    if ui.checkbox(&mut chronological, "Calendar ordering").changed() {
        state.filters.date_order = if chronological {
            DateOrder::Chronological
        } else {
            DateOrder::Lexical
        };
        changed = true;
    }

    ui.add_space(6.0);

    // ---- Review type selector ----
    ui.strong("Type");
    let selected_text = match &state.filters.post_type {
        TypeFilter::All => "All".to_string(),
        TypeFilter::Only(t) => t.to_string(),
    };
    egui::ComboBox::from_id_salt("type_filter")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            let is_all = state.filters.post_type == TypeFilter::All;
            if ui.selectable_label(is_all, "All").clicked() {
                state.filters.post_type = TypeFilter::All;
                changed = true;
            }
            for t in PostType::known() {
                let is_selected = state.filters.post_type == TypeFilter::Only(t.clone());
                if ui.selectable_label(is_selected, t.to_string()).clicked() {
                    state.filters.post_type = TypeFilter::Only(t);
                    changed = true;
                }
            }
        });

    if changed {
        state.refilter();
    }
}

/// Combo box selecting one value out of the distinct date-label set.
fn label_combo(
    ui: &mut Ui,
    id: &str,
    title: &str,
    current: &mut String,
    labels: &[String],
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(title);
        egui::ComboBox::from_id_salt(id)
            .selected_text(current.clone())
            .show_ui(ui, |ui: &mut Ui| {
                for label in labels {
                    if ui.selectable_label(*current == *label, label).clicked() {
                        *current = label.clone();
                        changed = true;
                    }
                }
            });
    });
    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_store_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let mut summary = format!(
                "{} reviews loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            );
            if state.skipped_rows > 0 {
                summary.push_str(&format!(" ({} rows skipped)", state.skipped_rows));
            }
            ui.label(summary);
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_store_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open review store")
        .add_filter("Review stores", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        log::info!("opening review store {}", path.display());
        state.open_store(path);
    }
}
