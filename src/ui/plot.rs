use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::{ORANGE, SKYBLUE, display_color32, generate_palette};
use crate::data::aggregate::{counts_by_type, length_by_hour, sentiment_by_date};
use crate::data::derive::COLOR_NEGATIVE;
use crate::data::model::{ReviewDataset, Sentiment};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Home view: three charts + sampled review cards
// ---------------------------------------------------------------------------

/// Render the Home page in the central panel.
pub fn home_view(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = state.dataset.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No review store loaded  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            daily_sentiment_chart(ui, &dataset, &state.visible_indices);
            ui.weak("Daily count of positive and negative movie reviews in r/movies.");
            ui.separator();

            length_vs_hour_chart(ui, &dataset, &state.visible_indices);
            ui.weak("Length of each movie review against the hour of day it was posted.");
            ui.separator();

            type_counts_chart(ui, &dataset, &state.visible_indices);
            ui.weak("Number of reviews per post type.");
            ui.separator();

            sample_cards(ui, &dataset, state);
        });
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// Grouped bars: positive/negative counts per day.
fn daily_sentiment_chart(ui: &mut Ui, dataset: &ReviewDataset, indices: &[usize]) {
    let counts = sentiment_by_date(dataset, indices);
    let labels: Vec<String> = counts.keys().cloned().collect();

    let mut positive_bars = Vec::with_capacity(labels.len());
    let mut negative_bars = Vec::with_capacity(labels.len());
    for (i, (label, day)) in counts.iter().enumerate() {
        let x = i as f64;
        positive_bars.push(
            Bar::new(x - 0.2, day.positive as f64)
                .width(0.35)
                .name(label),
        );
        negative_bars.push(
            Bar::new(x + 0.2, day.negative as f64)
                .width(0.35)
                .name(label),
        );
    }

    let axis_labels = labels.clone();
    Plot::new("daily_sentiment")
        .legend(Legend::default())
        .height(200.0)
        .x_axis_label("Date")
        .y_axis_label("Reviews")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 0.05 || i < 0.0 {
                return String::new();
            }
            axis_labels
                .get(i as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(positive_bars)
                    .color(SKYBLUE)
                    .name("positive"),
            );
            plot_ui.bar_chart(
                BarChart::new(negative_bars)
                    .color(ORANGE)
                    .name("negative"),
            );
        });
}

/// Scatter of text length vs hour of day, one series per display color.
fn length_vs_hour_chart(ui: &mut Ui, dataset: &ReviewDataset, indices: &[usize]) {
    let points = length_by_hour(dataset, indices);

    let series = |negative: bool| -> PlotPoints {
        points
            .iter()
            .filter(|p| (p.display_color == COLOR_NEGATIVE) == negative)
            .map(|p| [p.text_length as f64, p.hour_of_day as f64])
            .collect()
    };

    Plot::new("length_by_hour")
        .legend(Legend::default())
        .height(200.0)
        .x_axis_label("Length")
        .y_axis_label("Hour")
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(series(false))
                    .shape(MarkerShape::Circle)
                    .radius(3.0)
                    .color(SKYBLUE)
                    .name("positive"),
            );
            plot_ui.points(
                Points::new(series(true))
                    .shape(MarkerShape::Circle)
                    .radius(3.0)
                    .color(ORANGE)
                    .name("negative"),
            );
        });
}

/// One bar per post type, distinct hue each.
fn type_counts_chart(ui: &mut Ui, dataset: &ReviewDataset, indices: &[usize]) {
    let counts = counts_by_type(dataset, indices);
    let palette = generate_palette(counts.len());

    let bars: Vec<Bar> = counts
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, ((post_type, &count), color))| {
            Bar::new(i as f64, count as f64)
                .width(0.6)
                .fill(color)
                .name(post_type.to_string())
        })
        .collect();

    let axis_labels: Vec<String> = counts.keys().map(|t| t.to_string()).collect();
    Plot::new("type_counts")
        .height(200.0)
        .x_axis_label("Type")
        .y_axis_label("Reviews")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 0.05 || i < 0.0 {
                return String::new();
            }
            axis_labels
                .get(i as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Sample review cards
// ---------------------------------------------------------------------------

fn sample_cards(ui: &mut Ui, dataset: &ReviewDataset, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Sample Reviews and Sentiment Predictions");
        if ui.small_button("Shuffle").clicked() {
            state.resample();
        }
    });

    let Some(sample) = &state.sample else {
        ui.label(
            "Not enough reviews in the current selection to show a sample. \
             Widen the filters or ingest more posts.",
        );
        return;
    };

    for &i in sample {
        let review = &dataset.reviews[i];
        ui.horizontal(|ui: &mut Ui| {
            let tag = match &review.sentiment {
                Sentiment::Positive => RichText::new("Positive").color(Color32::GREEN),
                Sentiment::Negative => RichText::new("Negative").color(Color32::RED),
                Sentiment::Unknown(label) => RichText::new(label.clone()).color(Color32::GRAY),
            };
            ui.label(tag.strong());
            ui.colored_label(display_color32(review.display_color), "●");
        });
        eframe::egui::CollapsingHeader::new(&review.title)
            .id_salt(i)
            .show(ui, |ui: &mut Ui| {
                ui.label(&review.comment);
            });
    }
}
