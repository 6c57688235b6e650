use std::collections::BTreeMap;

use super::model::{PostType, ReviewDataset, Sentiment};

// ---------------------------------------------------------------------------
// Pure reductions over the filtered set, one per chart
// ---------------------------------------------------------------------------

/// Per-day sentiment counts for the grouped bar chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailySentimentCounts {
    pub positive: usize,
    pub negative: usize,
    /// Reviews whose sentiment label was neither `positive` nor `negative`.
    pub other: usize,
}

/// Count reviews per (`date_label`, sentiment), keyed by label in ascending
/// string order.
pub fn sentiment_by_date(
    dataset: &ReviewDataset,
    indices: &[usize],
) -> BTreeMap<String, DailySentimentCounts> {
    let mut counts: BTreeMap<String, DailySentimentCounts> = BTreeMap::new();
    for &i in indices {
        let review = &dataset.reviews[i];
        let entry = counts.entry(review.date_label.clone()).or_default();
        match &review.sentiment {
            Sentiment::Positive => entry.positive += 1,
            Sentiment::Negative => entry.negative += 1,
            Sentiment::Unknown(_) => entry.other += 1,
        }
    }
    counts
}

/// One point of the length-vs-hour scatter chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterPoint {
    pub text_length: usize,
    pub hour_of_day: u32,
    pub display_color: &'static str,
}

/// Per-record (`text_length`, `hour_of_day`, `display_color`) triples, in
/// filtered-set order.
pub fn length_by_hour(dataset: &ReviewDataset, indices: &[usize]) -> Vec<ScatterPoint> {
    indices
        .iter()
        .map(|&i| {
            let review = &dataset.reviews[i];
            ScatterPoint {
                text_length: review.text_length,
                hour_of_day: review.hour_of_day,
                display_color: review.display_color,
            }
        })
        .collect()
}

/// Count reviews per post type for the category bar chart.
pub fn counts_by_type(dataset: &ReviewDataset, indices: &[usize]) -> BTreeMap<PostType, usize> {
    let mut counts: BTreeMap<PostType, usize> = BTreeMap::new();
    for &i in indices {
        *counts.entry(dataset.reviews[i].post_type.clone()).or_default() += 1;
    }
    counts
}
