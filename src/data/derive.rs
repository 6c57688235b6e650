use chrono::{Local, TimeZone, Timelike};

use super::error::DataError;
use super::model::{RawReview, Review, Sentiment, PostType};

// ---------------------------------------------------------------------------
// Display colors
// ---------------------------------------------------------------------------

pub const COLOR_NEGATIVE: &str = "orange";
pub const COLOR_NON_NEGATIVE: &str = "skyblue";

/// Color name for a sentiment: "orange" for negative, "skyblue" for anything
/// else, including unknown labels, which deliberately take the default branch.
pub fn display_color(sentiment: &Sentiment) -> &'static str {
    if sentiment.is_negative() {
        COLOR_NEGATIVE
    } else {
        COLOR_NON_NEGATIVE
    }
}

// ---------------------------------------------------------------------------
// Per-record derivation
// ---------------------------------------------------------------------------

/// Derive the display columns for a single raw row. Pure: depends only on the
/// row itself (and the local timezone for date/hour formatting).
///
/// A missing, non-numeric, or out-of-range `created` value fails with
/// [`DataError::MalformedRecord`].
pub fn derive_review(raw: &RawReview, row: usize) -> Result<Review, DataError> {
    let trimmed = raw.created.trim();
    if trimmed.is_empty() {
        return Err(DataError::malformed(row, "missing 'created' timestamp"));
    }
    let created: i64 = trimmed.parse().map_err(|_| {
        DataError::malformed(
            row,
            format!("'created' is not an integer timestamp: {trimmed:?}"),
        )
    })?;
    let local = Local
        .timestamp_opt(created, 0)
        .single()
        .ok_or_else(|| {
            DataError::malformed(row, format!("'created' timestamp out of range: {created}"))
        })?;

    let sentiment = Sentiment::parse(&raw.sentiment);
    Ok(Review {
        created,
        date_label: local.format("%b %d").to_string(),
        hour_of_day: local.hour(),
        text_length: raw.title.chars().count() + raw.comment.chars().count(),
        display_color: display_color(&sentiment),
        sentiment,
        post_type: PostType::parse(&raw.post_type),
        title: raw.title.clone(),
        comment: raw.comment.clone(),
    })
}

// ---------------------------------------------------------------------------
// Batch derivation
// ---------------------------------------------------------------------------

/// Derive all rows, skipping malformed ones with a warning. Returns the
/// surviving reviews in store order and the number of rows skipped.
pub fn derive_reviews(raws: &[RawReview]) -> (Vec<Review>, usize) {
    let mut reviews = Vec::with_capacity(raws.len());
    let mut skipped = 0;

    for (row, raw) in raws.iter().enumerate() {
        match derive_review(raw, row) {
            Ok(review) => reviews.push(review),
            Err(e) => {
                log::warn!("skipping malformed review: {e}");
                skipped += 1;
            }
        }
    }
    (reviews, skipped)
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::{derive_review, derive_reviews};
    use crate::data::error::DataError;
    use crate::data::model::{RawReview, Sentiment, PostType};

    /// Epoch seconds for a local-time instant, so `date_label` / `hour_of_day`
    /// expectations hold regardless of the machine's timezone.
    fn local_epoch(y: i32, m: u32, d: u32, h: u32) -> i64 {
        Local
            .with_ymd_and_hms(y, m, d, h, 30, 0)
            .single()
            .expect("valid local datetime")
            .timestamp()
    }

    fn raw(created: String, sentiment: &str) -> RawReview {
        RawReview {
            created,
            title: "An okay film".to_string(),
            comment: "Watched it twice.".to_string(),
            sentiment: sentiment.to_string(),
            post_type: "Discussion".to_string(),
        }
    }

    #[test]
    fn derives_date_label_and_hour_in_local_time() {
        let ts = local_epoch(2022, 1, 5, 14);
        let review = derive_review(&raw(ts.to_string(), "positive"), 0).unwrap();

        assert_eq!(review.date_label, "Jan 05");
        assert_eq!(review.hour_of_day, 14);
        assert_eq!(review.created, ts);
        assert_eq!(review.post_type, PostType::Discussion);
    }

    #[test]
    fn text_length_sums_title_and_comment_char_counts() {
        let ts = local_epoch(2022, 1, 5, 9);
        let mut r = raw(ts.to_string(), "positive");
        r.title = "héllo".to_string(); // 5 chars, 6 bytes
        r.comment = "ab".to_string();
        let review = derive_review(&r, 0).unwrap();
        assert_eq!(review.text_length, 7);
    }

    #[test]
    fn display_color_is_orange_only_for_negative() {
        let ts = local_epoch(2022, 1, 5, 9).to_string();

        let neg = derive_review(&raw(ts.clone(), "negative"), 0).unwrap();
        assert_eq!(neg.display_color, "orange");
        assert_eq!(neg.sentiment, Sentiment::Negative);

        let pos = derive_review(&raw(ts.clone(), "positive"), 0).unwrap();
        assert_eq!(pos.display_color, "skyblue");

        // Unknown labels take the non-negative branch.
        let odd = derive_review(&raw(ts, "mixed"), 0).unwrap();
        assert_eq!(odd.display_color, "skyblue");
        assert_eq!(odd.sentiment, Sentiment::Unknown("mixed".to_string()));
    }

    #[test]
    fn malformed_created_is_rejected() {
        let missing = derive_review(&raw(String::new(), "positive"), 3);
        assert!(matches!(
            missing,
            Err(DataError::MalformedRecord { row: 3, .. })
        ));

        let non_numeric = derive_review(&raw("yesterday".to_string(), "positive"), 7);
        assert!(matches!(
            non_numeric,
            Err(DataError::MalformedRecord { row: 7, .. })
        ));
    }

    #[test]
    fn batch_derivation_skips_bad_rows_and_counts_them() {
        let ts = local_epoch(2022, 1, 6, 10).to_string();
        let rows = vec![
            raw(ts.clone(), "positive"),
            raw("not-a-timestamp".to_string(), "negative"),
            raw(ts, "negative"),
        ];

        let (reviews, skipped) = derive_reviews(&rows);
        assert_eq!(reviews.len(), 2);
        assert_eq!(skipped, 1);
        assert_eq!(reviews[1].sentiment, Sentiment::Negative);
    }
}
