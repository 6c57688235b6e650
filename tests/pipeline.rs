//! End-to-end pipeline tests: on-disk store → load → derive → filter →
//! aggregate / sample.

use std::io::Write;

use chrono::{Local, TimeZone};
use tempfile::NamedTempFile;

use review_pulse::data::aggregate::sentiment_by_date;
use review_pulse::data::derive::derive_reviews;
use review_pulse::data::error::DataError;
use review_pulse::data::filter::{FilterState, filtered_indices};
use review_pulse::data::loader::load_store;
use review_pulse::data::model::ReviewDataset;
use review_pulse::data::sample::{SAMPLE_SIZE, sample_indices};

/// Epoch seconds for a local-time instant so date labels are stable across
/// machine timezones.
fn local_epoch(day: u32, hour: u32) -> i64 {
    Local
        .with_ymd_and_hms(2022, 1, day, hour, 15, 0)
        .single()
        .expect("valid local datetime")
        .timestamp()
}

fn write_store(rows: &[(String, &str, &str, &str, &str)]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp store");
    writeln!(file, "created,title,comment,sentiment,type").unwrap();
    for (created, title, comment, sentiment, post_type) in rows {
        writeln!(file, "{created},{title},{comment},{sentiment},{post_type}").unwrap();
    }
    file
}

#[test]
fn range_filter_and_daily_counts_over_a_three_day_store() {
    let store = write_store(&[
        (local_epoch(1, 9).to_string(), "A", "first", "positive", "Discussion"),
        (local_epoch(2, 14).to_string(), "B", "second", "negative", "News"),
        (local_epoch(3, 20).to_string(), "C", "third", "positive", "Article"),
    ]);

    let raws = load_store(store.path()).expect("store should load");
    let (reviews, skipped) = derive_reviews(&raws);
    assert_eq!(skipped, 0);
    let dataset = ReviewDataset::from_reviews(reviews);

    assert_eq!(dataset.date_labels, vec!["Jan 01", "Jan 02", "Jan 03"]);

    // Inclusive range keeps exactly the first two records.
    let filters = FilterState {
        date_range: Some(("Jan 01".to_string(), "Jan 02".to_string())),
        ..FilterState::default()
    };
    assert_eq!(filtered_indices(&dataset, &filters), vec![0, 1]);

    // Per-(date, sentiment) counts over the full set.
    let all: Vec<usize> = (0..dataset.len()).collect();
    let counts = sentiment_by_date(&dataset, &all);
    assert_eq!(counts.len(), 3);
    assert_eq!((counts["Jan 01"].positive, counts["Jan 01"].negative), (1, 0));
    assert_eq!((counts["Jan 02"].positive, counts["Jan 02"].negative), (0, 1));
    assert_eq!((counts["Jan 03"].positive, counts["Jan 03"].negative), (1, 0));
}

#[test]
fn empty_store_loads_but_cannot_be_sampled() {
    let store = write_store(&[]);

    let raws = load_store(store.path()).expect("empty store should load");
    assert!(raws.is_empty());

    let (reviews, skipped) = derive_reviews(&raws);
    assert_eq!((reviews.len(), skipped), (0, 0));
    let dataset = ReviewDataset::from_reviews(reviews);
    assert!(dataset.is_empty());
    assert!(dataset.date_bounds().is_none());

    let visible = filtered_indices(&dataset, &FilterState::default());
    let err = sample_indices(&visible, SAMPLE_SIZE).expect_err("sampling must degrade");
    assert!(matches!(
        err,
        DataError::InsufficientData { available: 0, .. }
    ));
}

#[test]
fn malformed_rows_are_skipped_without_aborting_the_load() {
    let store = write_store(&[
        (local_epoch(5, 9).to_string(), "A", "ok", "positive", "Discussion"),
        ("last tuesday".to_string(), "B", "bad", "negative", "News"),
        (String::new(), "C", "bad", "negative", "News"),
        (local_epoch(6, 9).to_string(), "D", "ok", "negative", "Article"),
    ]);

    let raws = load_store(store.path()).expect("store should load");
    let (reviews, skipped) = derive_reviews(&raws);
    assert_eq!(reviews.len(), 2);
    assert_eq!(skipped, 2);
    assert_eq!(reviews[0].title, "A");
    assert_eq!(reviews[1].title, "D");
}

#[test]
fn sampling_a_large_filtered_set_returns_five_distinct_reviews() {
    let rows: Vec<(String, &str, &str, &str, &str)> = (1..=12)
        .map(|day| {
            (
                local_epoch(day, 10).to_string(),
                "T",
                "C",
                if day % 3 == 0 { "negative" } else { "positive" },
                "Discussion",
            )
        })
        .collect();
    let store = write_store(&rows);

    let raws = load_store(store.path()).expect("store should load");
    let (reviews, _) = derive_reviews(&raws);
    let dataset = ReviewDataset::from_reviews(reviews);

    let visible = filtered_indices(&dataset, &FilterState::default());
    let picked = sample_indices(&visible, SAMPLE_SIZE).expect("enough rows to sample");

    assert_eq!(picked.len(), SAMPLE_SIZE);
    let mut unique = picked.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), SAMPLE_SIZE);
    assert!(picked.iter().all(|&i| i < dataset.len()));
}
